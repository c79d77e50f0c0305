//! Binary for generating contract schemas from odra modules.
#![doc = "Binary for generating contract schemas from odra modules."]

#[allow(unused_imports)]
use token_lending_contracts;

fn main() {
    // Schema generation is driven by the odra-build crate
}
