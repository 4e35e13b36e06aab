// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lectern-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lectern and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Lectern CLI entrypoint.
//!
//! By default this presents a deck in the terminal. Without a deck file the built-in
//! "Ruby DNA" talk is shown.

use std::error::Error;

use lectern::render::{self, RenderOptions};
use lectern::store::{DeckFile, WriteDurability};

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [<deck.json>]\n  {program} [<deck.json>] --print [--width <n>] [--height <n>]\n  {program} [<deck.json>] --outline\n  {program} [<deck.json>] --export <path> [--durable-writes]\n\nWithout a deck file the built-in talk is used.\nThe default mode presents the deck interactively (arrows/space to move, [ and ] to jump\nbetween sections, q to quit).\n\n--print writes every slide as a text frame (default {}x{}, at most {} per side).\n--outline lists the slides, grouped by section.\n--export writes the deck as JSON; --durable-writes syncs the file and its directory.",
        render::DEFAULT_WIDTH,
        render::DEFAULT_HEIGHT,
        MAX_PRINT_SIZE
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
enum Mode {
    #[default]
    Present,
    Print,
    Outline,
    Export(String),
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    mode: Mode,
    deck_path: Option<String>,
    width: Option<usize>,
    height: Option<usize>,
    durable_writes: bool,
}

fn set_mode(options: &mut CliOptions, mode: Mode) -> Result<(), ()> {
    if options.mode != Mode::Present {
        return Err(());
    }
    options.mode = mode;
    Ok(())
}

const MAX_PRINT_SIZE: usize = 10_000;

fn parse_size(raw: Option<String>) -> Result<usize, ()> {
    let value: usize = raw.ok_or(())?.parse().map_err(|_| ())?;
    if value == 0 || value > MAX_PRINT_SIZE {
        return Err(());
    }
    Ok(value)
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--print" => set_mode(&mut options, Mode::Print)?,
            "--outline" => set_mode(&mut options, Mode::Outline)?,
            "--export" => {
                let path = args.next().ok_or(())?;
                set_mode(&mut options, Mode::Export(path))?;
            }
            "--width" => {
                if options.width.is_some() {
                    return Err(());
                }
                options.width = Some(parse_size(args.next())?);
            }
            "--height" => {
                if options.height.is_some() {
                    return Err(());
                }
                options.height = Some(parse_size(args.next())?);
            }
            "--durable-writes" => {
                if options.durable_writes {
                    return Err(());
                }
                options.durable_writes = true;
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.deck_path.is_some() {
                    return Err(());
                }
                options.deck_path = Some(arg);
            }
        }
    }

    let sized = options.width.is_some() || options.height.is_some();
    if sized && options.mode != Mode::Print {
        return Err(());
    }

    if options.durable_writes && !matches!(options.mode, Mode::Export(_)) {
        return Err(());
    }

    Ok(options)
}

fn main() {
    env_logger::init();

    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "lectern".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        let deck = match &options.deck_path {
            Some(path) => DeckFile::new(path).load()?,
            None => lectern::talk::ruby_dna()?,
        };

        match options.mode {
            Mode::Present => lectern::tui::run(deck)?,
            Mode::Print => {
                let defaults = RenderOptions::default();
                let render_options = RenderOptions {
                    width: options.width.unwrap_or(defaults.width),
                    height: options.height.unwrap_or(defaults.height),
                    ..defaults
                };
                println!("{}", render::render_deck_unicode(&deck, render_options)?);
            }
            Mode::Outline => print!("{}", render::render_outline(&deck)),
            Mode::Export(path) => {
                let durability = if options.durable_writes {
                    WriteDurability::Durable
                } else {
                    WriteDurability::BestEffort
                };
                DeckFile::new(path).with_durability(durability).save(&deck)?;
            }
        }

        Ok(())
    })();

    if let Err(err) = result {
        log::error!("{err}");
        eprintln!("lectern: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{parse_options, CliOptions, Mode};

    fn parse(args: &[&str]) -> Result<CliOptions, ()> {
        parse_options(args.iter().map(|arg| (*arg).to_owned()))
    }

    #[test]
    fn parses_empty_args() {
        let options = parse(&[]).expect("parse options");
        assert_eq!(options, CliOptions::default());
        assert_eq!(options.mode, Mode::Present);
    }

    #[test]
    fn parses_positional_deck_path() {
        let options = parse(&["talk.json"]).expect("parse options");
        assert_eq!(options.deck_path.as_deref(), Some("talk.json"));
        assert_eq!(options.mode, Mode::Present);
    }

    #[test]
    fn parses_print_with_size() {
        let options =
            parse(&["--print", "--width", "100", "--height", "30"]).expect("parse options");
        assert_eq!(options.mode, Mode::Print);
        assert_eq!(options.width, Some(100));
        assert_eq!(options.height, Some(30));
    }

    #[test]
    fn parses_export_with_durable_writes_in_any_order() {
        let options = parse(&["--durable-writes", "deck.json", "--export", "out.json"])
            .expect("parse options");
        assert_eq!(options.mode, Mode::Export("out.json".to_owned()));
        assert_eq!(options.deck_path.as_deref(), Some("deck.json"));
        assert!(options.durable_writes);
    }

    #[test]
    fn accepts_largest_print_size() {
        let options =
            parse(&["--print", "--width", "10000", "--height", "10000"]).expect("parse options");
        assert_eq!(options.width, Some(10_000));
        assert_eq!(options.height, Some(10_000));
    }

    #[test]
    fn parses_outline() {
        let options = parse(&["--outline"]).expect("parse options");
        assert_eq!(options.mode, Mode::Outline);
    }

    #[rstest]
    #[case::unknown_flag(&["--nope"])]
    #[case::two_modes(&["--print", "--outline"])]
    #[case::duplicate_mode(&["--print", "--print"])]
    #[case::missing_export_path(&["--export"])]
    #[case::two_deck_paths(&["one.json", "two.json"])]
    #[case::width_without_print(&["--width", "100"])]
    #[case::zero_width(&["--print", "--width", "0"])]
    #[case::bad_height(&["--print", "--height", "tall"])]
    #[case::huge_width(&["--print", "--width", "100000"])]
    #[case::huge_height(&["--print", "--height", "10001"])]
    #[case::duplicate_width(&["--print", "--width", "90", "--width", "100"])]
    #[case::durable_without_export(&["--durable-writes"])]
    fn rejects_invalid_args(#[case] args: &[&str]) {
        parse(args).unwrap_err();
    }
}
