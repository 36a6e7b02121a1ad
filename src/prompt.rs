use std::io::{self, BufRead, Write};

/// Asks the user a yes/no question
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> io::Result<bool>;
}

/// Reads answers line by line, asking again until it gets a yes or a no
pub struct LineConfirm<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LineConfirm<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Confirm for LineConfirm<R, W> {
    fn confirm(&mut self, prompt: &str) -> io::Result<bool> {
        writeln!(self.output, "{}", prompt)?;
        loop {
            write!(self.output, "[y/n]: ")?;
            self.output.flush()?;
            let mut answer = String::new();
            if self.input.read_line(&mut answer)? == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "No answer given",
                ));
            }
            match answer.trim().to_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => continue,
            }
        }
    }
}

/// A threshold of zero days deletes every tweet, so make the user say so first
pub fn confirm_threshold(days: u32, confirm: &mut dyn Confirm) -> io::Result<bool> {
    if days > 0 {
        return Ok(true);
    }
    confirm.confirm("This will delete all of your tweets! Are you sure?")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn answer(input: &str) -> (io::Result<bool>, String) {
        let mut output = Vec::new();
        let result = LineConfirm::new(Cursor::new(input.as_bytes()), &mut output).confirm("Sure?");
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn accepts_yes_and_no() {
        assert!(answer("y\n").0.unwrap());
        assert!(answer("YES\n").0.unwrap());
        assert!(!answer("n\n").0.unwrap());
        assert!(!answer("  No  \n").0.unwrap());
    }

    #[test]
    fn asks_again_on_anything_else() {
        let (result, output) = answer("maybe\n\nyes\n");
        assert!(result.unwrap());
        assert_eq!(output.matches("[y/n]").count(), 3);
        assert!(output.starts_with("Sure?\n"));
    }

    #[test]
    fn end_of_input_is_an_error() {
        let (result, _) = answer("maybe\n");
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::UnexpectedEof);
    }

    struct Scripted {
        answer: bool,
        asked: usize,
    }

    impl Confirm for Scripted {
        fn confirm(&mut self, _prompt: &str) -> io::Result<bool> {
            self.asked += 1;
            Ok(self.answer)
        }
    }

    #[test]
    fn only_zero_days_needs_confirmation() {
        let mut confirm = Scripted {
            answer: false,
            asked: 0,
        };
        assert!(confirm_threshold(7, &mut confirm).unwrap());
        assert_eq!(confirm.asked, 0);
        assert!(!confirm_threshold(0, &mut confirm).unwrap());
        assert_eq!(confirm.asked, 1);
    }
}
