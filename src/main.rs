fn main() -> Result<(), disc_template_tool::TemplateError> {
    // Set up logging for development
    env_logger::init();

    // One render with the default paths, overwriting existing files
    let (vector_path, raster_path) = disc_template_tool::render_default()?;
    println!("{}", vector_path.display());
    println!("{}", raster_path.display());
    Ok(())
}
