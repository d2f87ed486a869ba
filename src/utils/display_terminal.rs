//! 터미널 출력 포맷팅
//!
//! 서버 시작 시 설정 요약을 박스 형태로 출력합니다. 로그와 별개로 항상 표준 출력에 찍힙니다.

/// 고정 너비 박스 제목
pub fn print_boxed_title(title: &str) {
    // 고정 너비 50칸 사용 (박스 내부 콘텐츠)
    let content_width = 50;
    let border = "═".repeat(content_width);

    println!("╔{}╗", border);
    println!("║{:^49}║", title);  // ^49로 49칸 중앙 정렬
    println!("╚{}╝", border);
}

pub fn summary_line(label: &str, value: &str) -> String {
    format!("   ├─ {}: {}", label, value)
}

/// 서버 시작 요약
pub fn print_startup_summary(bind_address: &str, database_name: &str, workers: usize) {
    println!();
    print_boxed_title("🚀 USER SIGNUP SERVICE");
    println!("{}", summary_line("Listening", &format!("http://{}", bind_address)));
    println!("{}", summary_line("Database", database_name));
    println!("{}", summary_line("Workers", &workers.to_string()));
    println!();
}
