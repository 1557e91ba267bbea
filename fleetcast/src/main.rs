use clap::Parser;
use fleetcast::app::FleetApp;

fn main() {
    env_logger::init();
    log::debug!("cwd: {:?}", std::env::current_dir());
    let args = FleetApp::parse();
    if let Err(e) = args.op.run(args.config_file.as_deref()) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
