use clap::ArgMatches;
use zune_core::options::DecoderOptions;

pub mod global_options;

pub fn get_decoder_options(options: &ArgMatches) -> DecoderOptions {
    let max_width = options.get_one::<usize>("max-width").copied();
    let max_height = options.get_one::<usize>("max-height").copied();
    let max_frames = options.get_one::<usize>("max-frames").copied();
    let strict_mode = options.get_flag("strict");
    let trust_canvas = options.get_flag("trust-canvas");

    let defaults = DecoderOptions::new_cmd();

    defaults
        .set_max_width(max_width.unwrap_or(defaults.get_max_width()))
        .set_max_height(max_height.unwrap_or(defaults.get_max_height()))
        .gif_set_max_frames(max_frames.unwrap_or(defaults.gif_get_max_frames()))
        .set_strict_mode(strict_mode)
        .gif_set_distrust_canvas(!trust_canvas)
}
