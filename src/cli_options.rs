#[derive(Debug, Clone, PartialEq)]
pub struct CliOptions {
    pub use_multi_thread: bool,
    pub scene_name: String,
    pub output: String,
    pub width: u32,
    pub height: u32,
    pub max_depth: u32,
    pub log_level: log::LevelFilter,
    pub show_help: bool,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            use_multi_thread: true,
            scene_name: String::from("sphere"),
            output: String::from("output.png"),
            width: 640,
            height: 480,
            max_depth: 5,
            log_level: log::LevelFilter::Info,
            show_help: false,
        }
    }
}

impl CliOptions {
    pub fn message() -> &'static str {
        r#"
        --use_multi_thread | --use_single_thread
        --scene_name <scene_name>
        --output <file.png | file.exr>
        --width <pixels> --height <pixels>
        --max_depth <bounces>
        --log_level <off | error | warn | info | debug | trace>
        --help
        "#
    }

    pub fn resolution(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

fn parse_number(key: &str, value: Option<String>) -> Result<u32, String> {
    let value = value.ok_or_else(|| format!("Missing value for {}", key))?;
    value
        .parse::<u32>()
        .map_err(|e| format!("Bad value {} for {}: {}", value, key, e))
}

fn required(key: &str, value: Option<String>) -> Result<String, String> {
    value.ok_or_else(|| format!("Missing value for {}", key))
}

pub fn parse_args(args: Vec<String>) -> Result<CliOptions, String> {
    let mut pairs: Vec<(String, Option<String>)> = Vec::new();
    let mut args = args.into_iter().rev().collect::<Vec<_>>();
    args.pop(); // Removes args[0]

    while let Some(key) = args.pop() {
        if !key.starts_with('-') {
            return Err(format!("Unrecognized key {}", key));
        }
        match args.last() {
            Some(value) if !value.starts_with('-') => {
                let value = args.pop();
                pairs.push((key, value));
            }
            _ => pairs.push((key, None)),
        }
    }
    // Applied in command-line order: later occurrences of a key override earlier ones.
    let mut options = CliOptions::default();
    for (k, v) in pairs.into_iter() {
        match k.as_str() {
            "--use_multi_thread" => options.use_multi_thread = true,
            "--use_single_thread" => options.use_multi_thread = false,
            "--scene_name" => options.scene_name = required(&k, v)?,
            "--output" => options.output = required(&k, v)?,
            "--width" => options.width = parse_number(&k, v)?,
            "--height" => options.height = parse_number(&k, v)?,
            "--max_depth" => options.max_depth = parse_number(&k, v)?,
            "--log_level" => {
                let level = required(&k, v)?;
                options.log_level = level
                    .parse()
                    .map_err(|_| format!("Bad log level {}", level))?;
            }
            "--help" => options.show_help = true,
            _ => return Err(format!("Unrecognized key {}", k)),
        }
    }
    if options.width == 0 || options.height == 0 {
        return Err(format!(
            "Empty resolution {}x{}",
            options.width, options.height
        ));
    }
    Ok(options)
}
