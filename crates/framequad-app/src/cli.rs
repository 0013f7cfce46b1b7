use std::path::PathBuf;

use clap::Parser;

/// framequad: draw video frames as textured quads into a PNG.
#[derive(Parser, Debug)]
#[command(name = "framequad", version, about)]
pub struct Args {
    /// PNG to use as the frame. A generated test pattern is used otherwise.
    #[arg(short = 'i', long)]
    pub input: Option<PathBuf>,

    /// Where to write the rendered target.
    #[arg(short = 'o', long, default_value = "frame.png")]
    pub output: PathBuf,

    /// Number of samples pushed through the stream.
    #[arg(short = 'n', long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub frames: u32,

    /// Target width override.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=8192))]
    pub width: Option<u32>,

    /// Target height override.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=8192))]
    pub height: Option<u32>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["framequad"]).unwrap();
        assert_eq!(args.output, PathBuf::from("frame.png"));
        assert_eq!(args.frames, 1);
        assert!(args.input.is_none());
        assert!(args.width.is_none());
    }

    #[test]
    fn overrides() {
        let args = Args::try_parse_from([
            "framequad", "-i", "in.png", "-o", "out.png", "-n", "5", "--width", "640",
            "--height", "480", "--log-level", "debug",
        ])
        .unwrap();
        assert_eq!(args.input, Some(PathBuf::from("in.png")));
        assert_eq!(args.output, PathBuf::from("out.png"));
        assert_eq!(args.frames, 5);
        assert_eq!(args.width, Some(640));
        assert_eq!(args.height, Some(480));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn oversized_target_rejected() {
        assert!(Args::try_parse_from(["framequad", "--width", "9000"]).is_err());
        assert!(Args::try_parse_from(["framequad", "--height", "0"]).is_err());
    }

    #[test]
    fn zero_frames_rejected() {
        assert!(Args::try_parse_from(["framequad", "--frames", "0"]).is_err());
    }
}
