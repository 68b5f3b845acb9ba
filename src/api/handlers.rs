use actix_web::http::header::ContentType;
use actix_web::{get, HttpResponse, Responder};

#[get("/")]
pub async fn live() -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body("Server is Live!")
}
