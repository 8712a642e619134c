//! Client entrypoint for the CSR build.

// Bin target reuses lib deps, silence noisy lint.
#![allow(unused_crate_dependencies)]

use leptos::prelude::*;
use smis_landing::{App, init_logging, seed_demo_storage};

fn main() {
	init_logging();
	seed_demo_storage();

	mount_to_body(|| {
		view! { <App /> }
	})
}
