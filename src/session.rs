//! Interactive menu session.
//!
//! A line-oriented front end over [`Scene`]: it prompts for shape
//! parameters, re-prompts on bad numbers or rejected sizes, and prints the
//! scene or hit-test results. Generic over its input and output so it can be
//! driven by stdin/stdout or by tests.

use std::io::{BufRead, Write};

use shapekit_core::{Point, ShapeError};
use shapekit_designer::{Circle, Group, Node, Rectangle, Scene};

/// Raised internally when the input stream is exhausted.
#[derive(Debug, thiserror::Error)]
#[error("end of input")]
struct EndOfInput;

const MENU: &str = "\n--- Editor menu ---\n\
1. Add circle\n\
2. Add rectangle\n\
3. Add group\n\
4. Show all objects\n\
5. Undo\n\
6. Redo\n\
7. Find object at coordinates\n\
0. Exit\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    AddCircle,
    AddRectangle,
    AddGroup,
    Show,
    Undo,
    Redo,
    Find,
    Exit,
}

impl MenuAction {
    fn from_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(MenuAction::AddCircle),
            "2" => Some(MenuAction::AddRectangle),
            "3" => Some(MenuAction::AddGroup),
            "4" => Some(MenuAction::Show),
            "5" => Some(MenuAction::Undo),
            "6" => Some(MenuAction::Redo),
            "7" => Some(MenuAction::Find),
            "0" => Some(MenuAction::Exit),
            _ => None,
        }
    }
}

/// An editing session bound to one scene.
pub struct Session<R, W> {
    scene: Scene,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(scene: Scene, input: R, output: W) -> Self {
        Self {
            scene,
            input,
            output,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn into_scene(self) -> Scene {
        self.scene
    }

    /// Runs the menu loop until the user exits or input ends.
    pub fn run(&mut self) -> anyhow::Result<()> {
        if !self.scene.is_empty() {
            writeln!(self.output, "Initial scene:")?;
            self.show_scene()?;
        }

        loop {
            match self.step() {
                Ok(true) => continue,
                Ok(false) => break,
                Err(err) if err.is::<EndOfInput>() => {
                    tracing::debug!("input closed, ending session");
                    break;
                }
                Err(err) => return Err(err),
            }
        }

        writeln!(self.output, "Exiting...")?;
        self.output.flush()?;
        Ok(())
    }

    /// Handles one menu choice. Returns `false` when the user asked to exit.
    fn step(&mut self) -> anyhow::Result<bool> {
        write!(self.output, "{MENU}")?;
        let line = self.prompt_line("Choose an option: ")?;

        let Some(action) = MenuAction::from_choice(&line) else {
            writeln!(self.output, "Invalid choice, try again.")?;
            return Ok(true);
        };

        match action {
            MenuAction::AddCircle => {
                let circle = self.read_circle()?;
                self.scene.add_object(circle);
                writeln!(self.output, "Circle added.")?;
            }
            MenuAction::AddRectangle => {
                let rect = self.read_rectangle()?;
                self.scene.add_object(rect);
                writeln!(self.output, "Rectangle added.")?;
            }
            MenuAction::AddGroup => {
                let group = self.read_group()?;
                self.scene.add_object(group);
                writeln!(self.output, "Group added.")?;
            }
            MenuAction::Show => {
                writeln!(self.output, "Current objects:")?;
                self.show_scene()?;
            }
            MenuAction::Undo => {
                let name = self.scene.history().peek_undo_name();
                match name {
                    Some(name) if self.scene.undo() => writeln!(self.output, "Undone: {name}")?,
                    _ => writeln!(self.output, "Nothing to undo.")?,
                }
            }
            MenuAction::Redo => {
                let name = self.scene.history().peek_redo_name();
                match name {
                    Some(name) if self.scene.redo() => writeln!(self.output, "Redone: {name}")?,
                    _ => writeln!(self.output, "Nothing to redo.")?,
                }
            }
            MenuAction::Find => {
                let x = self.read_int("Enter X coordinate: ")?;
                let y = self.read_int("Enter Y coordinate: ")?;
                let found = self
                    .scene
                    .find_element_at(Point::new(x, y))
                    .map(|node| node.render(self.scene.style()));
                match found {
                    Some(text) => write!(self.output, "Found object:\n{text}")?,
                    None => writeln!(self.output, "No objects at this position.")?,
                }
            }
            MenuAction::Exit => return Ok(false),
        }
        Ok(true)
    }

    fn show_scene(&mut self) -> anyhow::Result<()> {
        write!(self.output, "{}", self.scene.render())?;
        Ok(())
    }

    fn prompt_line(&mut self, prompt: &str) -> anyhow::Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(EndOfInput.into());
        }
        Ok(line.trim().to_string())
    }

    fn read_int(&mut self, prompt: &str) -> anyhow::Result<i32> {
        loop {
            let line = self.prompt_line(prompt)?;
            match line.parse::<i32>() {
                Ok(value) => return Ok(value),
                Err(_) => writeln!(self.output, "Invalid number. Try again.")?,
            }
        }
    }

    /// Reads values until `build` accepts one, echoing each rejection.
    fn read_until_valid<T>(
        &mut self,
        prompt: &str,
        build: impl Fn(i32) -> Result<T, ShapeError>,
    ) -> anyhow::Result<T> {
        loop {
            let value = self.read_int(prompt)?;
            match build(value) {
                Ok(shape) => return Ok(shape),
                Err(err) => writeln!(self.output, "{err}.")?,
            }
        }
    }

    fn read_circle(&mut self) -> anyhow::Result<Circle> {
        let x = self.read_int("Enter circle center X: ")?;
        let y = self.read_int("Enter circle center Y: ")?;
        self.read_until_valid("Enter circle radius (>0): ", |r| Circle::new(x, y, r))
    }

    fn read_rectangle(&mut self) -> anyhow::Result<Rectangle> {
        let x = self.read_int("Enter top-left X: ")?;
        let y = self.read_int("Enter top-left Y: ")?;
        // Validate each side as it is entered, using the other side's
        // smallest legal value as a stand-in.
        let width = self.read_until_valid("Enter width (>0): ", |w| {
            Rectangle::new(x, y, w, 1).map(|r| r.width())
        })?;
        self.read_until_valid("Enter height (>0): ", |h| Rectangle::new(x, y, width, h))
    }

    fn read_group(&mut self) -> anyhow::Result<Group> {
        let x = self.read_int("Enter group X position: ")?;
        let y = self.read_int("Enter group Y position: ")?;
        let mut group = Group::new(x, y);

        let count = self.read_int("Number of objects to add to the group: ")?;
        for index in 1..=count.max(0) {
            writeln!(
                self.output,
                "Choose type of object #{index} for the group:\n1. Circle\n2. Rectangle\n3. Group"
            )?;
            let choice = self.prompt_line("Your choice: ")?;
            let child: Node = match choice.as_str() {
                "1" => self.read_circle()?.into(),
                "2" => self.read_rectangle()?.into(),
                "3" => self.read_group()?.into(),
                _ => {
                    writeln!(self.output, "Invalid choice, skipping this object.")?;
                    continue;
                }
            };
            group.add(child);
        }
        Ok(group)
    }
}
