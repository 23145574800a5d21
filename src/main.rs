use actix::{Actor, Arbiter};
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::process;

#[macro_use]
extern crate log;

mod cli;
mod config;
mod dashboard;
mod database;
mod employee;
mod errors;
mod handlers;
mod job;
mod search;
mod views;

use config::{Config, Policy, Settings};
use database::{Close, Database};

pub struct Context {
    pub policy: Policy,
}

#[actix_rt::main]
async fn main() -> std::io::Result<()> {
    let matches = cli::ask().get_matches();

    let level = if matches.get_flag("verbose") {
        "debug"
    } else {
        "info"
    };
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(format!("jobdesk={0},actix_web={0}", level)),
    )
    .init();

    let serve = match matches.subcommand_matches("serve") {
        Some(serve) => serve,
        None => return Ok(()),
    };

    let config_path = serve
        .get_one::<String>("config")
        .map(|path| shellexpand::tilde(path).into_owned());

    let settings = match Config::load(config_path.as_deref())
        .and_then(|config| Settings::resolve(serve, config))
    {
        Ok(settings) => settings,
        Err(err) => {
            error!("{}", err);
            process::exit(1);
        }
    };

    let database = match Database::open(&settings.database) {
        Ok(database) => database,
        Err(err) => {
            error!("{}", err);
            process::exit(1);
        }
    };
    info!("Using database at {}", &settings.database);
    debug!("Running with {:?}", &settings.policy);

    let arbiter = Arbiter::new();
    let database = Database::start_in_arbiter(&arbiter.handle(), move |_| database);

    let localhost = IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1));
    let socket = SocketAddr::new(localhost, settings.port);
    let storage = web::Data::new(database.clone());
    let context = web::Data::new(Context {
        policy: settings.policy,
    });

    info!("Starting jobdesk at {}", &socket);
    let served = match HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(storage.clone())
            .app_data(context.clone())
            .configure(handlers::configure)
    })
    .bind(socket)
    {
        Ok(server) => server.run().await,
        Err(err) => Err(err),
    };

    info!("Closing the database");
    if let Err(err) = database.send(Close).await {
        error!("Failed to close the database: {}", err);
    }
    arbiter.stop();
    if arbiter.join().is_err() {
        error!("Database arbiter stopped abnormally");
    }

    served
}
