pub const GREETING: &str = "Greetings from Spring Boot!";

pub async fn greeting() -> &'static str {
    GREETING
}
