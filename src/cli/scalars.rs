//! Listing of the specified scalars

use crate::registry::specified_scalar_types;

/// One block per scalar, in registry order
pub fn scalars_overview() -> String {
    let mut out = String::from("SPECIFIED SCALARS\n");
    for scalar in specified_scalar_types() {
        out.push_str(&format!("\n  {}\n    {}\n", scalar.name(), scalar.description()));
    }
    out.push_str("\nRun 'gql-scalars serialize <SCALAR> --input <JSON>' to coerce a value.\n");
    out
}
