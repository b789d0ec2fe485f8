#![warn(clippy::pedantic, elided_lifetimes_in_paths, explicit_outlives_requirements)]
#![allow(non_snake_case)]

use {
	std::io::BufWriter,
	texture_converter::{convertAll, stdoutRaw},
};

fn main() {
	const TEXTURES_FOLDER: &str = "./assets/Various/";
	convertAll(TEXTURES_FOLDER.as_ref(), &mut BufWriter::new(stdoutRaw()));
}
