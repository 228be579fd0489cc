//! 사용자 계정 서비스 메인 애플리케이션
//!
//! 설정을 읽고 MongoDB 연결과 Cloudinary 클라이언트를 준비한 뒤
//! Actix-web HTTP 서버를 구동합니다.

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use user_service_backend::config::{AppConfig, ServerConfig};
use user_service_backend::db::Database;
use user_service_backend::repositories::users::UserRepository;
use user_service_backend::routes::configure_all_routes;
use user_service_backend::services::media::CloudinaryClient;
use user_service_backend::state::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 사용자 계정 서비스 시작중...");

    let config = AppConfig::from_env().map_err(|e| {
        error!("설정 로드 실패: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;
    info!("실행 환경: {:?}", config.environment);

    std::fs::create_dir_all(&config.uploads.directory)?;

    let state = initialize_state(config).await?;

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(state).await
}

/// 저장소와 미디어 호스트를 연결하고 공유 상태를 조립합니다.
///
/// MongoDB 연결 또는 인덱스 생성이 실패하면 서버를 띄우지 않습니다.
async fn initialize_state(config: AppConfig) -> std::io::Result<AppState> {
    info!("📡 데이터베이스 연결 중...");

    let database = Database::connect(&config.database)
        .await
        .map_err(to_io_error)?;

    let repository = UserRepository::new(&database);
    repository.ensure_indexes().await.map_err(to_io_error)?;

    let media_host = CloudinaryClient::new(config.cloudinary.clone()).map_err(to_io_error)?;
    info!("☁️ 미디어 호스트: {:?}", config.cloudinary);

    Ok(AppState::new(config, Arc::new(repository), Arc::new(media_host)))
}

fn to_io_error(e: impl std::fmt::Display) -> std::io::Error {
    error!("초기화 실패: {}", e);
    std::io::Error::other(e.to_string())
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
async fn start_http_server(state: AppState) -> std::io::Result<()> {
    let bind_address = state.config.server.bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/api/v1/healthcheck", bind_address);

    let data = web::Data::new(state);

    HttpServer::new(move || {
        let cors = configure_cors(&data.config.server);
        let uploads = data.config.uploads.clone();

        App::new()
            .app_data(data.clone())
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(|cfg| configure_all_routes(cfg, &uploads))
    })
    .bind(bind_address)?
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// CORS 설정을 구성합니다
///
/// `CORS_ORIGIN` 하나만 허용하며 쿠키 전송을 위해 자격 증명을 지원합니다.
fn configure_cors(server: &ServerConfig) -> Cors {
    Cors::default()
        .allowed_origin(&server.cors_origin)
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .supports_credentials()
        .max_age(3600)
}
