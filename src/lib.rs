#![warn(clippy::pedantic, elided_lifetimes_in_paths, explicit_outlives_requirements)]
#![allow(non_snake_case)]

pub const TGA_EXTENSION: &str = ".tga";
pub const PNG_EXTENSION: &str = ".png";

use std::{
	fs::{self, File},
	io::Write,
	os,
	path::Path,
};

/*
	Turns every "*.tga" in `directory` (however the suffix is cased) into a
	same-base-named "*.png" sibling, in whatever order the filesystem yields
	the entries. Existing files at the output name are overwritten; the
	originals are left alone. One "Converted a.tga to a.png" line per file
	goes to `stdout`.
*/
pub fn convertAll(directory: &Path, stdout: &mut impl Write) {
	for dirEntry in fs::read_dir(directory).unwrap_or_else(|err| panic!("{directory:?}: {err}")) {
		let filename = dirEntry.unwrap().file_name();
		let filename = filename.to_str().unwrap();
		if !filename.to_lowercase().ends_with(TGA_EXTENSION) {
			continue;
		}
		let image =
			image::open(directory.join(filename)).unwrap_or_else(|err| panic!("{filename:?}: {err}"));
		// the suffix filter guarantees the dot; only the last segment is stripped
		let newFilename = [filename.rsplit_once('.').unwrap().0, PNG_EXTENSION].concat();
		image
			.save(directory.join(&newFilename))
			.unwrap_or_else(|err| panic!("{newFilename:?}: {err}"));
		writeln!(stdout, "Converted {filename} to {newFilename}").unwrap();
	}
}

#[cfg(unix)]
pub fn stdoutRaw() -> File {
	use os::unix::io::FromRawFd;
	unsafe { File::from_raw_fd(1) }
}

#[cfg(windows)]
pub fn stdoutRaw() -> File {
	use {
		os::windows::io::{AsRawHandle, FromRawHandle},
		std::io,
	};
	unsafe { File::from_raw_handle(io::stdout().as_raw_handle()) }
}
