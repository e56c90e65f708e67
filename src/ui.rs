use crate::config::Config;
use crate::form::{
    FormState, Language, ReadingLevel, StoryLength, TextField, Tone, PRESET_THEMES,
};
use crate::prompt::compose;
use crate::services::{HttpImageService, HttpStoryService, ImageService, StoryService};
use crate::workflow::GenerationWorkflow;
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use inquire::{Select, Text};
use std::time::Duration;

const MENU_CHILD_NAME: &str = "Child's name";
const MENU_AGE: &str = "Age";
const MENU_THEMES: &str = "Themes";
const MENU_CUSTOM_THEME: &str = "Custom theme";
const MENU_TONE: &str = "Tone";
const MENU_LENGTH: &str = "Length";
const MENU_LANGUAGE: &str = "Language";
const MENU_READING_LEVEL: &str = "Reading level";
const MENU_MORAL: &str = "Moral";
const MENU_GENERATE: &str = "Generate story";
const MENU_QUIT: &str = "Quit";

/// Interactive editing loop: the prompt preview is recomputed from the
/// current form state on every pass, so what the user sees is exactly what
/// a generate action will send.
pub async fn run(config: Config) -> Result<()> {
    let story_service = HttpStoryService::new(&config.story_endpoint);
    let image_service = HttpImageService::new(&config.image_endpoint);

    let mut form = FormState::default();
    let mut workflow = GenerationWorkflow::new();

    println!("Story Maker - craft a personalized children's story");

    loop {
        println!("\nPrompt preview:");
        println!("---------------");
        println!("{}", compose(&form));
        println!("---------------");

        let choice = Select::new(
            "Edit a field, or generate:",
            vec![
                MENU_CHILD_NAME,
                MENU_AGE,
                MENU_THEMES,
                MENU_CUSTOM_THEME,
                MENU_TONE,
                MENU_LENGTH,
                MENU_LANGUAGE,
                MENU_READING_LEVEL,
                MENU_MORAL,
                MENU_GENERATE,
                MENU_QUIT,
            ],
        )
        .prompt()?;

        match choice {
            MENU_CHILD_NAME => edit_text(&mut form, TextField::ChildName, "Child's name:")?,
            MENU_AGE => edit_text(&mut form, TextField::Age, "Age:")?,
            MENU_THEMES => edit_themes(&mut form)?,
            MENU_CUSTOM_THEME => edit_text(
                &mut form,
                TextField::CustomTheme,
                "Custom theme (e.g. Somali folklore):",
            )?,
            MENU_TONE => form.tone = Select::new("Tone:", Tone::ALL.to_vec()).prompt()?,
            MENU_LENGTH => {
                form.length = Select::new("Length:", StoryLength::ALL.to_vec()).prompt()?
            }
            MENU_LANGUAGE => {
                form.language = Select::new("Language:", Language::ALL.to_vec()).prompt()?
            }
            MENU_READING_LEVEL => {
                form.reading_level =
                    Select::new("Reading level:", ReadingLevel::ALL.to_vec()).prompt()?
            }
            MENU_MORAL => edit_text(&mut form, TextField::Moral, "Moral (e.g. sharing):")?,
            MENU_GENERATE => {
                generate(&mut workflow, &form, &story_service, &image_service).await?
            }
            _ => break,
        }
    }

    Ok(())
}

fn edit_text(form: &mut FormState, field: TextField, message: &str) -> Result<()> {
    let current = match field {
        TextField::ChildName => &form.child_name,
        TextField::Age => &form.age,
        TextField::CustomTheme => &form.custom_theme,
        TextField::Moral => &form.moral,
    };
    let value = Text::new(message).with_initial_value(current).prompt()?;
    form.update_field(field, value);
    Ok(())
}

fn edit_themes(form: &mut FormState) -> Result<()> {
    loop {
        let mut options: Vec<String> = PRESET_THEMES
            .iter()
            .map(|t| {
                let mark = if form.has_theme(t) { "x" } else { " " };
                format!("[{}] {}", mark, t)
            })
            .collect();
        options.push("Done".to_string());

        let choice = Select::new("Toggle a theme:", options).prompt()?;
        if choice == "Done" {
            break;
        }
        // strip the "[x] " marker
        form.toggle_theme(&choice[4..]);
    }
    Ok(())
}

async fn generate(
    workflow: &mut GenerationWorkflow,
    form: &FormState,
    story_service: &dyn StoryService,
    image_service: &dyn ImageService,
) -> Result<()> {
    if workflow.is_loading() {
        println!("A generation attempt is already running.");
        return Ok(());
    }

    let prompt = compose(form);

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.set_message("Generating...");
    pb.enable_steady_tick(Duration::from_millis(120));

    workflow.run(story_service, image_service, &prompt).await?;
    pb.finish_and_clear();

    let output = workflow.output();
    if !output.error.is_empty() {
        println!("{}", output.error);
    }
    if !output.story.is_empty() {
        println!("\nYour story:\n");
        println!("{}", output.story);
    }
    if !output.image.is_empty() {
        println!("\nIllustration: {}", output.image);
    }

    Ok(())
}
