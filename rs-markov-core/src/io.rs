use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Reads a text file and returns all its lines as a `Vec<String>`.
///
/// - Streams the file line by line
/// - Strips `\n` / `\r\n`
pub(crate) fn read_file<P: AsRef<Path>>(filename: P) -> io::Result<Vec<String>> {
	let reader = BufReader::new(File::open(filename)?);
	reader.lines().collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;

	#[test]
	fn reads_every_line() {
		let path = std::env::temp_dir().join(format!("rs-markov-io-{}.txt", std::process::id()));
		{
			let mut file = File::create(&path).unwrap();
			write!(file, "first line\r\nsecond line\n\nlast").unwrap();
		}

		let lines = read_file(&path).unwrap();
		std::fs::remove_file(&path).unwrap();
		assert_eq!(lines, vec!["first line", "second line", "", "last"]);
	}

	#[test]
	fn missing_file_is_an_error() {
		assert!(read_file("/definitely/not/here.txt").is_err());
	}
}
