fn main() -> anyhow::Result<()> {
    let success = tablebook_lib::run()?;
    if !success {
        std::process::exit(1);
    }
    Ok(())
}
