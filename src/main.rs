use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, Subcommand};
use log::{debug, error};
use recipe_form::{
    ClientConfig, RecipeClient, RecipeDraft, RecipeField, RecipeForm, SelectedFile,
    SourceRecipe, SubmitError,
};

#[derive(Parser)]
#[command(name = "recipe-form")]
#[command(about = "Validate and submit recipes to the recipe service", long_about = None)]
struct Cli {
    /// Configuration file (default: ./recipe-form.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a draft and create (or fork) the recipe
    Submit {
        /// JSON recipe draft
        #[arg(long)]
        draft: Option<PathBuf>,
        /// JSON recipe to fork. A draft given alongside replaces each of its
        /// non-empty text fields, and a non-empty draft ingredient list
        /// replaces the source's list as a whole. Empty draft values keep the
        /// source's value.
        #[arg(long, verbatim_doc_comment)]
        fork: Option<PathBuf>,
        /// Image to upload as the recipe photo
        #[arg(long)]
        photo: Option<PathBuf>,
        /// Owner of the new recipe
        #[arg(long)]
        user: Option<String>,
        /// Recipe service URL
        #[arg(long)]
        server: Option<String>,
        /// Request timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,
    },
    /// Validate a draft without contacting the service
    Validate {
        /// JSON recipe draft
        #[arg(long)]
        draft: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => ClientConfig::load_from(path)?,
        None => ClientConfig::load()?,
    };

    match cli.command {
        Commands::Validate { draft } => {
            let mut form = RecipeForm::new();
            fill_form(&mut form, &read_json::<RecipeDraft>(&draft).await?)?;
            if !form.validate() {
                eprint!("{}", form.errors());
                return Err("Recipe draft is invalid".into());
            }
            println!("Recipe draft is valid");
        }
        Commands::Submit {
            draft,
            fork,
            photo,
            user,
            server,
            timeout,
        } => {
            let draft = match &draft {
                Some(path) => Some(read_json::<RecipeDraft>(path).await?),
                None => None,
            };

            let mut form = match (&fork, draft) {
                (Some(path), draft) => {
                    let source = read_json::<SourceRecipe>(path).await?;
                    let source = match draft {
                        Some(draft) => merge_fork(source, draft),
                        None => source,
                    };
                    RecipeForm::fork_of(&source)
                }
                (None, Some(draft)) => {
                    let mut form = RecipeForm::new();
                    fill_form(&mut form, &draft)?;
                    form
                }
                (None, None) => return Err("Provide --draft or --fork".into()),
            };

            if let Some(path) = &photo {
                form.select_file(SelectedFile::from_path(path).await?);
            }

            let user = user
                .or_else(|| config.user_id.clone())
                .ok_or("No user given; use --user or set user_id in the configuration")?;

            let mut builder = RecipeClient::builder().config(&config);
            if let Some(server) = server {
                builder = builder.base_url(server);
            }
            if let Some(timeout) = timeout {
                builder = builder.timeout(Duration::from_secs(timeout));
            }
            let api = builder.build()?;

            match form.submit(&api, &user).await {
                Ok(outcome) => println!("{}", outcome.route),
                Err(SubmitError::Invalid(errors)) => {
                    eprint!("{}", errors);
                    return Err("Recipe draft is invalid".into());
                }
                Err(e) => {
                    error!("{}", e);
                    return Err(e.into());
                }
            }
        }
    }

    Ok(())
}

async fn read_json<T: serde::de::DeserializeOwned>(
    path: &Path,
) -> Result<T, Box<dyn std::error::Error>> {
    let content = tokio::fs::read_to_string(path).await?;
    Ok(serde_json::from_str(&content)?)
}

/// Apply a draft on top of the recipe being forked.
///
/// Non-empty text fields replace the source's; a non-empty ingredient list
/// replaces the source's list entirely. The photo is not carried over.
fn merge_fork(source: SourceRecipe, draft: RecipeDraft) -> SourceRecipe {
    fn pick(draft: String, source: String) -> String {
        if draft.is_empty() {
            source
        } else {
            draft
        }
    }

    SourceRecipe {
        id: source.id,
        title: pick(draft.title, source.title),
        description: pick(draft.description, source.description),
        instructions: pick(draft.instructions, source.instructions),
        ingredients: if draft.ingredients.is_empty() {
            source.ingredients
        } else {
            draft.ingredients
        },
    }
}

/// Copy a loaded draft into a blank form through its edit operations
fn fill_form(
    form: &mut RecipeForm,
    draft: &RecipeDraft,
) -> Result<(), Box<dyn std::error::Error>> {
    debug!("Loaded draft '{}'", draft.title);

    for (field, value) in [
        (RecipeField::Title, &draft.title),
        (RecipeField::Description, &draft.description),
        (RecipeField::Instructions, &draft.instructions),
        (RecipeField::Photo, &draft.photo),
    ] {
        form.set_field(field, value.as_str());
    }

    for (index, ingredient) in draft.ingredients.iter().enumerate() {
        if index >= form.ingredient_count() {
            form.add_ingredient();
        }
        let mut row = form.ingredient_row(index).ok_or("Ingredient row missing")?;
        row.set_ingredient(ingredient.ingredient.as_str());
        row.set_amount(ingredient.amount.as_str());
        row.set_unit_of_measure(ingredient.unit_of_measure.as_str());
    }

    Ok(())
}
