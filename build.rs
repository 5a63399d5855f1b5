use vergen::{BuildBuilder, Emitter};
use vergen_git2::Git2Builder;

// `codefolio --version` reads VERGEN_GIT_DESCRIBE, so it must always be set.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let build = BuildBuilder::default().build_date(true).build()?;
    let mut emitter = Emitter::default();
    emitter.add_instructions(&build)?;

    match Git2Builder::default().describe(true, true, None).build() {
        Ok(git) => {
            emitter.add_instructions(&git)?;
        }
        // Source tarballs have no repository to describe.
        Err(_) => println!("cargo:rustc-env=VERGEN_GIT_DESCRIBE=unknown"),
    }

    emitter.emit()?;
    Ok(())
}
