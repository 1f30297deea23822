use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::middleware::Logger;
use actix_web::{get, put, web, App, HttpResponse, HttpServer, Responder};

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Deserialize;

use lorem_core::io::read_snapshot_or_default;
use lorem_core::{ConfigSnapshot, Lorem, Outcome};

/// Header telling the client which side effect a response stands for.
const ACTION_HEADER: &str = "X-Lorem-Action";

/// Command line of the server.
#[derive(Parser, Debug)]
#[command(version, about = "Serves placeholder text over HTTP")]
struct Args {
	/// Address to bind
	#[arg(long, default_value = "127.0.0.1:5000")]
	bind: String,

	/// Snapshot file (JSON) used as the initial configuration
	#[arg(long)]
	config: Option<PathBuf>,
}

/// Query parameters of `/v1/generate`.
#[derive(Deserialize)]
struct GenerateParams {
	command: String,
	seed: Option<u64>,
}

/// State shared by every worker.
///
/// The lock only guards the swap of the `Lorem`. A request clones the `Arc`
/// and generates without holding the lock, so it keeps the snapshot it
/// started with even if a `PUT /v1/config` lands meanwhile.
struct SharedData {
	lorem: Arc<Lorem>,
}

/// Current `Lorem`, or `None` if the lock is poisoned.
fn current_lorem(data: &Mutex<SharedData>) -> Option<Arc<Lorem>> {
	data.lock().ok().map(|shared_data| Arc::clone(&shared_data.lorem))
}

fn help_redirect(url: &str) -> HttpResponse {
	HttpResponse::SeeOther()
		.insert_header((header::LOCATION, url))
		.insert_header((ACTION_HEADER, "open-help"))
		.finish()
}

/// HTTP GET endpoint `/v1/generate`
///
/// Runs one command and returns the generated text.
/// - help requests redirect to the help page
/// - `config` returns the current snapshot
/// - malformed commands return 400 with the message
#[get("/v1/generate")]
async fn get_generated(data: web::Data<Mutex<SharedData>>, query: web::Query<GenerateParams>) -> impl Responder {
	let Some(lorem) = current_lorem(&data) else {
		return HttpResponse::InternalServerError().body("Configuration lock failed");
	};

	let result = match query.seed {
		Some(seed) => lorem.execute_with_rng(&query.command, StdRng::seed_from_u64(seed)),
		None => lorem.execute(&query.command),
	};

	match result {
		Ok(Outcome::Text(text)) => HttpResponse::Ok().content_type("text/plain; charset=utf-8").body(text),
		Ok(Outcome::OpenHelp(url)) => help_redirect(&url),
		Ok(Outcome::OpenSettings) => HttpResponse::Ok()
			.insert_header((ACTION_HEADER, "open-settings"))
			.json(lorem.snapshot()),
		Err(e) => {
			log::debug!("Rejected command {:?}: {e}", query.command);
			HttpResponse::BadRequest().body(e.to_string())
		}
	}
}

#[get("/v1/help")]
async fn get_help(data: web::Data<Mutex<SharedData>>) -> impl Responder {
	let Some(lorem) = current_lorem(&data) else {
		return HttpResponse::InternalServerError().body("Configuration lock failed");
	};
	help_redirect(&lorem.snapshot().commands.help_url)
}

#[get("/v1/config")]
async fn get_config(data: web::Data<Mutex<SharedData>>) -> impl Responder {
	let Some(lorem) = current_lorem(&data) else {
		return HttpResponse::InternalServerError().body("Configuration lock failed");
	};
	HttpResponse::Ok().json(lorem.snapshot())
}

/// HTTP PUT endpoint `/v1/config`
///
/// Replaces the snapshot. The old one stays active if the new one is invalid.
#[put("/v1/config")]
async fn put_config(data: web::Data<Mutex<SharedData>>, snapshot: web::Json<ConfigSnapshot>) -> impl Responder {
	let lorem = match Lorem::new(snapshot.into_inner()) {
		Ok(lorem) => Arc::new(lorem),
		Err(e) => return HttpResponse::BadRequest().body(format!("Invalid configuration: {e}")),
	};

	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Configuration lock failed"),
	};
	shared_data.lorem = Arc::clone(&lorem);
	drop(shared_data);
	log::info!("Configuration replaced");

	HttpResponse::Ok().json(lorem.snapshot())
}

/// Registers every endpoint, shared by `main` and the tests.
fn configure(cfg: &mut web::ServiceConfig) {
	cfg.service(get_generated)
		.service(get_help)
		.service(get_config)
		.service(put_config);
}

/// Main entry point for the server.
///
/// Loads the initial snapshot, shares the generator behind a `Mutex`
/// and starts an Actix-web HTTP server.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
	let args = Args::parse();

	let snapshot = read_snapshot_or_default(args.config.as_ref())
		.map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
	let lorem = Lorem::new(snapshot).map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
	let shared_data = web::Data::new(Mutex::new(SharedData { lorem: Arc::new(lorem) }));

	log::info!("Listening on {}", args.bind);
	HttpServer::new(move || {
		App::new()
			.wrap(Logger::default())
			.wrap(Cors::permissive())
			.app_data(shared_data.clone())
			.configure(configure)
	})
		.bind(args.bind)?
		.run()
		.await
}
