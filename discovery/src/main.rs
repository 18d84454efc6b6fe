mod discovery_actors;
mod messages;
mod repository;

use std::env;

use actix::prelude::*;
use colored::Color;
use common::constants::DEFAULT_API_BASE_URL;
use common::logger::Logger;
use common::messages::{
    CarouselSnapped, DismissSelection, MarkerPressed, SearchCenterChanged, SetCuisine,
    SetDistanceRadius, ShowDetail, ToggleTag,
};
use common::types::Coordinate;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::signal::ctrl_c;

use crate::discovery_actors::console_surface::ConsoleSurface;
use crate::discovery_actors::screen::Screen;
use crate::repository::RestaurantRepository;

#[actix::main]
async fn main() -> std::io::Result<()> {
    let logger = Logger::new("Main", Color::Blue);
    let base_url =
        env::var("DISCOVERY_API_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());

    let repository = match RestaurantRepository::new(&base_url) {
        Ok(repository) => repository,
        Err(e) => {
            logger.error(format!("cannot build API client for '{base_url}': {e}"));
            std::process::exit(1);
        }
    };

    logger.info(format!("restaurant discovery demo, API at {base_url}"));
    print_help(&logger);

    let surface = ConsoleSurface::new().start();
    let screen = Screen::new(repository, surface.recipient()).start();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            _ = ctrl_c() => {
                logger.info("ctrl-c received, shutting down");
                break;
            }
            line = lines.next_line() => match line {
                Ok(Some(line)) => {
                    if !dispatch(line.trim(), &screen, &logger) {
                        break;
                    }
                }
                Ok(None) => break,
                Err(e) => {
                    logger.error(format!("stdin error: {e}"));
                    break;
                }
            }
        }
    }

    actix::System::current().stop();
    Ok(())
}

fn print_help(logger: &Logger) {
    logger.info("commands:");
    logger.info("  cuisine <label>      toggle the cuisine filter");
    logger.info("  tag <label>          toggle a tag filter");
    logger.info("  radius <km>          move the distance slider");
    logger.info("  center <lat> <lon>   move the search center");
    logger.info("  press <index>        tap a map marker");
    logger.info("  snap <index>         swipe the carousel to a card");
    logger.info("  dismiss              close the detail panel");
    logger.info("  detail <id>          open a restaurant detail page");
    logger.info("  help                 show this text");
    logger.info("  quit                 exit");
}

/// Parses one console line into a screen intent. Returns `false` to quit.
fn dispatch(line: &str, screen: &Addr<Screen>, logger: &Logger) -> bool {
    let mut parts = line.split_whitespace();
    match parts.next() {
        Some("cuisine") => {
            let label: String = parts.collect::<Vec<_>>().join(" ");
            if label.is_empty() {
                logger.warn("usage: cuisine <label>");
            } else {
                screen.do_send(SetCuisine { label });
            }
        }
        Some("tag") => {
            let label: String = parts.collect::<Vec<_>>().join(" ");
            if label.is_empty() {
                logger.warn("usage: tag <label>");
            } else {
                screen.do_send(ToggleTag { label });
            }
        }
        Some("radius") => match parts.next().and_then(|raw| raw.parse::<f64>().ok()) {
            Some(km) => screen.do_send(SetDistanceRadius { km }),
            None => logger.warn("usage: radius <km>"),
        },
        Some("center") => {
            let lat = parts.next().and_then(|raw| raw.parse::<f64>().ok());
            let lon = parts.next().and_then(|raw| raw.parse::<f64>().ok());
            match (lat, lon) {
                (Some(latitude), Some(longitude)) => screen.do_send(SearchCenterChanged {
                    center: Coordinate::new(latitude, longitude),
                }),
                _ => logger.warn("usage: center <lat> <lon>"),
            }
        }
        Some("press") => match parts.next().and_then(|raw| raw.parse::<usize>().ok()) {
            Some(index) => screen.do_send(MarkerPressed { index }),
            None => logger.warn("usage: press <index>"),
        },
        Some("snap") => match parts.next().and_then(|raw| raw.parse::<usize>().ok()) {
            Some(index) => screen.do_send(CarouselSnapped { index }),
            None => logger.warn("usage: snap <index>"),
        },
        Some("dismiss") => screen.do_send(DismissSelection),
        Some("detail") => match parts.next() {
            Some(id) => screen.do_send(ShowDetail { id: id.to_string() }),
            None => logger.warn("usage: detail <id>"),
        },
        Some("help") => print_help(logger),
        Some("quit") | Some("exit") => return false,
        Some(other) => logger.warn(format!("unknown command '{other}', try 'help'")),
        None => {}
    }
    true
}
