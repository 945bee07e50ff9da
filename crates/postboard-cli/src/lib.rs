mod args;
pub mod console;
pub mod session;

pub use args::Cli;

use anyhow::Result;
use postboard_client::{ApiClient, ApiGateway, ClientConfig};
use postboard_engine::{Document, ViewController};

use crate::console::ConsoleView;
use crate::session::{LimitGateway, Session};

pub fn run(cli: Cli) -> Result<()> {
    let config = ClientConfig::new(cli.api_url.as_deref(), cli.timeout_secs);
    let client = ApiClient::new(config)?;
    let gateway = LimitGateway::new(ApiGateway::new(client), cli.limit);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let controller = ViewController::new(Document::shared());
    let view = ConsoleView::new();
    let mut session = Session::new(controller, gateway, view);

    runtime.block_on(session.run())
}
