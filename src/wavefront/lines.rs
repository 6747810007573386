use std::borrow::Cow;
use std::io::{ self, BufRead };

/// Line-at-a-time reader with no length ceiling.
///
/// Each line is cut at its first `\r` or `\n`; bytes that are not valid
/// UTF-8 are replaced rather than rejected.
pub struct LineReader<R> {
	reader: R,
	buffer: Vec<u8>,
	number: usize,
}

impl<R: BufRead> LineReader<R> {
	pub fn new(reader: R) -> Self {
		LineReader {
			reader,
			buffer: Vec::new(),
			number: 0,
		}
	}

	/// Next line with its 1-based number, or `None` at end of input.
	pub fn next_line(&mut self) -> io::Result<Option<(usize, Cow<'_, str>)>> {
		self.buffer.clear();
		if self.reader.read_until(b'\n', &mut self.buffer)? == 0 {
			return Ok(None);
		}
		self.number += 1;

		let end = self.buffer
			.iter()
			.position(|&b| b == b'\r' || b == b'\n')
			.unwrap_or(self.buffer.len());

		Ok(Some((self.number, String::from_utf8_lossy(&self.buffer[..end]))))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn collect(input: &[u8]) -> Vec<(usize, String)> {
		let mut reader = LineReader::new(input);
		let mut lines = Vec::new();
		while let Some((number, line)) = reader.next_line().unwrap() {
			lines.push((number, line.into_owned()));
		}
		lines
	}

	#[test]
	fn trims_line_endings() {
		let lines = collect(b"v 1 2 3\r\nvn 0 0 1\n\nlast");

		assert_eq!(lines, vec![
			(1, String::from("v 1 2 3")),
			(2, String::from("vn 0 0 1")),
			(3, String::new()),
			(4, String::from("last")),
		]);
	}

	#[test]
	fn long_lines_are_not_truncated() {
		let long = "f ".to_string() + &"1/1/1 ".repeat(2000);
		let input = format!("{}\nv 0 0 0\n", long);
		let lines = collect(input.as_bytes());

		assert_eq!(lines.len(), 2);
		assert_eq!(lines[0].1, long);
	}

	#[test]
	fn invalid_utf8_is_replaced() {
		let lines = collect(b"g caf\xe9\n");

		assert_eq!(lines[0].1, "g caf\u{fffd}");
	}
}
