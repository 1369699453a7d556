mod components;
mod config;
mod logging;

use anyhow::Context;
use clap::Parser;
use echo_api::{EchoApi, PollOptions, RequestView};
use eframe::{App, NativeOptions};
use log::info;

use crate::components::{content_header_panel::content_header_panel, content_panel::content_panel};
use crate::config::Config;

pub struct Gui {
    pub request_view: RequestView,
}
impl Gui {
    fn new(cc: &eframe::CreationContext<'_>, api: EchoApi, options: PollOptions) -> Self {
        let ctx = cc.egui_ctx.clone();
        let request_view = RequestView::mount(api, options, move || ctx.request_repaint());
        Gui { request_view }
    }
}

impl App for Gui {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        content_header_panel(self, ctx);
        content_panel(self, ctx);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    logging::init_logging(config.verbose);

    let api = EchoApi::new(&config.base_url, config.timeout())
        .with_context(|| format!("could not build echo client for {}", config.base_url))?;
    let options = config.poll_options();
    info!("watching {}", api.echo_url());

    let native_options = NativeOptions::default();
    eframe::run_native(
        "HTTP Echo Server",
        native_options,
        Box::new(move |cc| Box::new(Gui::new(cc, api, options))),
    )
    .map_err(|err| anyhow::anyhow!("viewer window failed: {err}"))?;

    info!("viewer closed");
    Ok(())
}
