use vergen_git2::{CargoBuilder, Emitter, Git2Builder};

// Site settings that may be supplied through the environment or a `.env` file.
const SITE_VARS: [&str; 4] = [
    "SITE_CONTACT_WEBHOOK_URL",
    "SITE_SCHEDULE_URL",
    "SITE_WHATSAPP_NUMBER",
    "SITE_INSTAGRAM_URL",
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env is fine, the defaults in src/config.rs apply
    let _ = dotenvy::dotenv();
    for name in SITE_VARS {
        println!("cargo:rerun-if-env-changed={name}");
        if let Ok(value) = std::env::var(name) {
            println!("cargo:rustc-env={name}={value}");
        }
    }
    println!("cargo:rerun-if-changed=.env");
    println!("cargo:rerun-if-changed=locales");

    let git = Git2Builder::default()
        .commit_timestamp(true)  // Emits VERGEN_GIT_COMMIT_TIMESTAMP
        .dirty(true)             // Emits VERGEN_GIT_DIRTY
        .sha(true)               // Emits VERGEN_GIT_SHA
        .describe(true, true, None)
        .build()?;

    let cargo = CargoBuilder::default()
        .opt_level(true)         // Emits VERGEN_CARGO_OPT_LEVEL
        .build()?;

    Emitter::default()
        .add_instructions(&git)?
        .add_instructions(&cargo)?
        .emit()?;

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs");
    Ok(())
}
