mod config;

use log::info;
use rs_ident_core::FeatureModel;
use rs_ident_core::io::list_files;

use config::Config;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Verdicts and scores are logged at info level; RUST_LOG=debug also shows I/O
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let config = Config::load();

    // Three short sentences, classified in memory
    let mut source1 = FeatureModel::new("source1");
    source1.add_string("It is interesting that she is interested.");
    let mut source2 = FeatureModel::new("source2");
    source2.add_string("I am very, very excited about this!");
    let mut mystery = FeatureModel::new("mystery");
    mystery.add_string("Is he interested? No, but I am.");
    println!("{}\n", mystery.classify(&source1, &source2));

    // Scripts from the data directory
    println!("Sources in {}:", config.data_dir.display());
    for file in list_files(&config.data_dir, "txt")? {
        println!("  {file}");
    }

    let mut incredibles = FeatureModel::new("The Incredibles");
    incredibles.add_file(config.data_dir.join("Incredibles.txt"))?;

    let mut shrek = FeatureModel::new("Shrek");
    shrek.add_files([config.data_dir.join("Shrek.txt"), config.data_dir.join("Shrek2.txt")])?;

    // Persist the two sources and classify against the reloaded copies
    incredibles.save(&config.model_dir)?;
    shrek.save(&config.model_dir)?;
    info!("saved source models to {}", config.model_dir.display());
    let source1 = FeatureModel::load("The Incredibles", &config.model_dir)?;
    let source2 = FeatureModel::load("Shrek", &config.model_dir)?;
    println!("\n{source1}\n{source2}\n");

    let unknowns = [
        ("The Bee Movie", "BeeMovie.txt"),
        ("Megamind", "Megamind.txt"),
        ("Shrek 3", "Shrek3.txt"),
        ("The Incredibles 2", "Incredibles2.txt"),
    ];
    for (name, file) in unknowns {
        let mut unknown = FeatureModel::new(name);
        unknown.add_file(config.data_dir.join(file))?;
        println!("{}\n", unknown.classify(&source1, &source2));
    }

    Ok(())
}
