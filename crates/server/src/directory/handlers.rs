use lnt_auth::Admin;
use lnt_directory::Directory;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::web;

pub async fn menus(directory: web::Data<Directory>) -> impl Responder {
    HttpResponse::Ok().json(directory.list_top_level_menus().await)
}
pub async fn menu(directory: web::Data<Directory>, path: web::Path<String>) -> impl Responder {
    match directory.get_menu(&path.into_inner()).await {
        Some(menu) => HttpResponse::Ok().json(menu),
        None => HttpResponse::NotFound().body("menu not found"),
    }
}
pub async fn children(directory: web::Data<Directory>, path: web::Path<String>) -> impl Responder {
    HttpResponse::Ok().json(directory.list_child_menus(&path.into_inner()).await)
}
pub async fn members(directory: web::Data<Directory>, path: web::Path<String>) -> impl Responder {
    HttpResponse::Ok().json(directory.list_members(&path.into_inner()).await)
}
pub async fn everyone(directory: web::Data<Directory>, admin: Admin) -> impl Responder {
    log::debug!("{} listed all members", admin.claims().username());
    HttpResponse::Ok().json(directory.list_all_members().await)
}
