//! Console frontend: numbered menus on a line-oriented terminal.

use std::io::{BufRead, Write};

use colored::Colorize;
use iw_core::Scene;
use iw_engine::{Frontend, GameError, GameResult, ResumeChoice, SceneView};

use crate::splash;
use crate::wrap::word_wrap;

/// Printed between turns.
pub fn scene_divider() -> String {
    format!("\n{}\n", "-".repeat(80))
}

/// Plays the game over any reader/writer pair.
pub struct ConsoleFrontend<R, W> {
    input: R,
    output: W,
    line_width: usize,
}

impl<R: BufRead, W: Write> ConsoleFrontend<R, W> {
    pub fn new(input: R, output: W, line_width: usize) -> Self {
        Self {
            input,
            output,
            line_width,
        }
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self) -> GameResult<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(GameError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    /// Print numbered options and read until a listed number is entered.
    /// Returns the zero-based index of the pick.
    fn menu(&mut self, options: &[&str]) -> GameResult<usize> {
        for (i, option) in options.iter().enumerate() {
            writeln!(self.output, "{}: {option}", i + 1)?;
        }
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            let answer = self.read_line()?;
            match answer.parse::<usize>() {
                Ok(n) if (1..=options.len()).contains(&n) => return Ok(n - 1),
                _ => writeln!(self.output, "Choice not recognized.  Choose again.")?,
            }
        }
    }

    fn write_wrapped(&mut self, text: &str) -> GameResult<()> {
        writeln!(self.output, "{}", word_wrap(text, self.line_width))?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> Frontend for ConsoleFrontend<R, W> {
    fn show_title(&mut self) -> GameResult<()> {
        writeln!(self.output, "{}", splash::TITLE)?;
        Ok(())
    }

    fn play_intro(&mut self) -> GameResult<()> {
        writeln!(self.output, "{}\n", word_wrap(splash::WELCOME, self.line_width))?;
        Ok(())
    }

    fn offer_resume(&mut self) -> GameResult<ResumeChoice> {
        write!(self.output, "{}", scene_divider())?;
        self.write_wrapped(
            "Existing save data detected.  Welcome back, captain.  \
             Would you like to continue your game or start over?",
        )?;
        if self.menu(&["Continue", "Delete save data and start new game"])? == 0 {
            return Ok(ResumeChoice::Continue);
        }

        write!(self.output, "{}", scene_divider())?;
        self.write_wrapped("Last chance -- delete your save data for good?")?;
        let pick = self.menu(&[
            "Keep my save data and continue my existing game",
            "Delete my save data and start over",
        ])?;
        Ok(if pick == 0 {
            ResumeChoice::Continue
        } else {
            ResumeChoice::StartOver
        })
    }

    fn present_choices(&mut self, view: &SceneView<'_>) -> GameResult<usize> {
        write!(self.output, "{}", scene_divider())?;
        if let Some(name) = view.world.and_then(Scene::world_name) {
            writeln!(self.output, "{}\n", format!("[{name}]").cyan())?;
        }
        self.write_wrapped(&view.scene.text)?;
        writeln!(self.output)?;

        let labels: Vec<&str> = view.choices.iter().map(|c| c.text.as_str()).collect();
        self.menu(&labels)
    }

    fn reject_choice(&mut self, _index: usize) -> GameResult<()> {
        writeln!(self.output, "Choice not recognized.  Choose again.")?;
        Ok(())
    }

    fn show_ending(&mut self, scene: &Scene) -> GameResult<()> {
        write!(self.output, "{}", scene_divider())?;
        writeln!(self.output, "{}", scene.text.bold())?;
        self.output.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use iw_core::{ChoiceRecord, GraphBuilder, SceneId, SceneRecord, TrickSet, visible_choices};

    use super::*;

    fn console(input: &str) -> ConsoleFrontend<Cursor<Vec<u8>>, Vec<u8>> {
        colored::control::set_override(false);
        ConsoleFrontend::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), 80)
    }

    fn output(frontend: ConsoleFrontend<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(frontend.into_output()).unwrap()
    }

    #[test]
    fn presents_numbered_choices() {
        let graph = GraphBuilder::new()
            .scene(SceneRecord::new("a", "Hello"))
            .scene(SceneRecord::new("b", "B"))
            .scene(SceneRecord::new("c", "C"))
            .choice(ChoiceRecord::new("c1", "a", "b").with_label("Stay"))
            .choice(ChoiceRecord::new("c2", "a", "c").with_label("Leave"))
            .build()
            .unwrap();
        let scene = graph.scene(&SceneId::new("a")).unwrap();
        let found = TrickSet::new();
        let view = SceneView {
            scene,
            world: None,
            choices: visible_choices(&graph, scene, &found),
            found_tricks: &found,
        };

        let mut frontend = console("2\n");
        let pick = frontend.present_choices(&view).unwrap();
        assert_eq!(pick, 1);

        let out = output(frontend);
        assert!(out.contains("Hello"));
        assert!(out.contains("1: Stay\n2: Leave\n"));
    }

    #[test]
    fn unrecognized_input_reprompts() {
        let mut frontend = console("zero\n3\n\n1\n");
        assert_eq!(frontend.menu(&["Go", "Wait"]).unwrap(), 0);
        let out = output(frontend);
        assert_eq!(out.matches("Choice not recognized.  Choose again.").count(), 3);
    }

    #[test]
    fn end_of_input_closes() {
        let mut frontend = console("");
        assert!(matches!(
            frontend.menu(&["Go"]),
            Err(GameError::InputClosed)
        ));
    }

    #[test]
    fn resume_continue() {
        let mut frontend = console("1\n");
        assert_eq!(frontend.offer_resume().unwrap(), ResumeChoice::Continue);
    }

    #[test]
    fn resume_start_over_needs_confirmation() {
        let mut frontend = console("2\n1\n");
        assert_eq!(frontend.offer_resume().unwrap(), ResumeChoice::Continue);

        let mut frontend = console("2\n2\n");
        assert_eq!(frontend.offer_resume().unwrap(), ResumeChoice::StartOver);
        assert!(output(frontend).contains("Last chance"));
    }

    /// Writer whose every write fails, like a closed pipe.
    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }
    }

    #[test]
    fn write_failures_are_reported() {
        let scene = Scene::new("end", "END", iw_core::Color::Red).unwrap();
        let mut frontend = ConsoleFrontend::new(Cursor::new(Vec::new()), BrokenPipe, 80);

        assert!(matches!(frontend.show_title(), Err(GameError::Io(_))));
        assert!(matches!(frontend.play_intro(), Err(GameError::Io(_))));
        assert!(matches!(frontend.reject_choice(3), Err(GameError::Io(_))));
        assert!(matches!(frontend.show_ending(&scene), Err(GameError::Io(_))));
    }

    #[test]
    fn scene_text_is_wrapped() {
        let graph = GraphBuilder::new()
            .scene(SceneRecord::new("a", "aaa bbb ccc"))
            .scene(SceneRecord::new("b", "B"))
            .choice(ChoiceRecord::new("c1", "a", "b"))
            .build()
            .unwrap();
        let scene = graph.scene(&SceneId::new("a")).unwrap();
        let found = TrickSet::new();
        let view = SceneView {
            scene,
            world: None,
            choices: visible_choices(&graph, scene, &found),
            found_tricks: &found,
        };

        let mut frontend = ConsoleFrontend::new(Cursor::new(b"1\n".to_vec()), Vec::new(), 7);
        frontend.present_choices(&view).unwrap();
        let out = String::from_utf8(frontend.into_output()).unwrap();
        assert!(out.contains("aaa bbb\nccc\n"));
    }
}
