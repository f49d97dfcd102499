// Author: Eshan Roy
// SPDX-License-Identifier: MIT

use vergen::EmitBuilder;

fn main() {
    // Outside a git checkout (release tarballs) the git instructions are
    // unavailable; version_string() then falls back to the crate version.
    let emitted = EmitBuilder::builder()
        .git_sha(true)
        .git_commit_date()
        .emit();

    if emitted.is_err() {
        let _ = EmitBuilder::builder().emit();
    }
}
