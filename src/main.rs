mod cli_options;
mod error;
mod image;
mod render;

use cli_options::CliOptions;
use error::RenderError;
use render::RenderOptions;

fn run(options: CliOptions) -> Result<(), RenderError> {
    let preset = scene::preset::by_name(&options.scene_name, options.resolution())
        .ok_or_else(|| RenderError::UnknownScene(options.scene_name.clone()))?;
    let image = render::render(
        &preset.scene,
        &preset.camera,
        &RenderOptions {
            max_depth: options.max_depth,
            use_multi_thread: options.use_multi_thread,
        },
    );
    image.write(&options.output)?;
    log::info!("wrote {}", options.output);
    Ok(())
}

fn main() {
    let options = match cli_options::parse_args(std::env::args().collect()) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{}\nusage: {}", RenderError::Cli(message), CliOptions::message());
            std::process::exit(2);
        }
    };
    if options.show_help {
        println!("usage: {}", CliOptions::message());
        return;
    }
    env_logger::Builder::new()
        .filter_level(options.log_level)
        .parse_default_env()
        .init();

    if let Err(e) = run(options) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
