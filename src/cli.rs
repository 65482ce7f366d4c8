use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};

pub fn build_cli() -> ArgMatches<'static> {
	build_app().get_matches()
}

pub fn build_app() -> App<'static, 'static> {
	App::new("srgan-eval")
		.version("v0.2.0")
		.about("Resolves and scores images with super-resolution models")
		.settings(&[AppSettings::SubcommandRequiredElseHelp, AppSettings::VersionlessSubcommands])
		.arg(build_config_arg())
		.subcommand(build_psnr_subcommand())
		.subcommand(build_resolve_subcommand())
		.subcommand(build_evaluate_subcommand())
		.subcommand(build_generate_config_subcommand())
}

fn build_config_arg() -> Arg<'static, 'static> {
	Arg::with_name("CONFIG")
		.short("c")
		.long("config")
		.value_name("CONFIG_FILE")
		.help("Reads model, evaluation and logging settings from a TOML or JSON file")
		.empty_values(false)
}

fn build_factor_arg() -> Arg<'static, 'static> {
	Arg::with_name("FACTOR")
		.short("f")
		.long("factor")
		.value_name("FACTOR")
		.help("Integer upscaling factor of the nearest-neighbour baseline. Overrides the config file. Default 4")
		.empty_values(false)
}

fn build_psnr_subcommand() -> App<'static, 'static> {
	SubCommand::with_name("psnr")
		.about("Prints the PSNR between two equally sized images")
		.arg(
			Arg::with_name("IMAGE1")
				.required(true)
				.index(1)
				.help("Reference image"),
		)
		.arg(
			Arg::with_name("IMAGE2")
				.required(true)
				.index(2)
				.help("Image to compare against the reference"),
		)
}

fn build_resolve_subcommand() -> App<'static, 'static> {
	SubCommand::with_name("resolve")
		.about("Resolves a low-resolution image with the nearest-neighbour baseline")
		.arg(
			Arg::with_name("INPUT_FILE")
				.required(true)
				.index(1)
				.help("Low-resolution input image"),
		)
		.arg(
			Arg::with_name("OUTPUT_FILE")
				.required(true)
				.index(2)
				.help("Sets the output file to write/overwrite (.png recommended)"),
		)
		.arg(build_factor_arg())
}

fn build_evaluate_subcommand() -> App<'static, 'static> {
	SubCommand::with_name("evaluate")
		.about("Scores the nearest-neighbour baseline on (low-res, high-res) image pairs and prints the mean PSNR")
		.arg(
			Arg::with_name("LR")
				.required(true)
				.long("lr")
				.value_name("LR_IMAGE")
				.help("Low-resolution image, paired in order with --hr")
				.empty_values(false)
				.multiple(true)
				.number_of_values(1),
		)
		.arg(
			Arg::with_name("HR")
				.required(true)
				.long("hr")
				.value_name("HR_IMAGE")
				.help("High-resolution reference image, paired in order with --lr")
				.empty_values(false)
				.multiple(true)
				.number_of_values(1),
		)
		.arg(build_factor_arg())
}

fn build_generate_config_subcommand() -> App<'static, 'static> {
	SubCommand::with_name("generate-config")
		.about("Writes an example configuration file")
		.arg(
			Arg::with_name("OUTPUT_FILE")
				.index(1)
				.help("Where to write the configuration. Default: eval_config.toml"),
		)
		.arg(
			Arg::with_name("FORCE")
				.long("force")
				.help("Overwrite an existing file"),
		)
}
