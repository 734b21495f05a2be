//! Charm-style CLI prompts using cliclack

use crate::answers::{Language, ModuleSystem, ProjectName, SetupAnswers, CURRENT_DIR};
use crate::config::SetupConfig;
use crate::generator::{self, GenerationReport, ProjectGenerator};
use crate::runtime::{check, Installer};
use crate::tui::reporter::CliReporter;
use anyhow::{Context, Result};

/// Ask the questions, generate the project, and print next steps
pub async fn run(config: &SetupConfig, cli_version: &str) -> Result<()> {
    cliclack::intro(format!("Express Project Setup CLI (v{})", cli_version))?;

    // Step 1: Report the Node.js runtime (advisory only)
    report_node_runtime().await?;

    // Step 2: Collect answers; an interrupted prompt returns early with nothing written
    let answers = collect_answers()?;

    // Step 3: Generate
    let cwd = std::env::current_dir().context("Failed to read the current directory")?;
    let installer = if config.skip_install {
        None
    } else {
        Some(Installer::from_config(config))
    };

    let report = ProjectGenerator::new(&answers, cwd, installer, CliReporter::new())
        .run()
        .await?;

    // Step 4: Show next steps
    print_next_steps(config, &answers, &report)?;

    Ok(())
}

async fn report_node_runtime() -> Result<()> {
    let node = check::check_node().await;
    if node.available {
        cliclack::log::info(format!("Detected runtime: {}", node.describe()))?;
    } else {
        cliclack::log::warning(
            "Node.js was not found. Install it from https://nodejs.org to run the project.",
        )?;
    }
    Ok(())
}

/// Present the fixed question sequence
pub fn collect_answers() -> Result<SetupAnswers> {
    let defaults = SetupAnswers::default();

    let project_name = prompt_project_name()?;

    let language: Language = cliclack::select("Select language")
        .item(Language::TypeScript, Language::TypeScript.display_name(), "")
        .item(Language::JavaScript, Language::JavaScript.display_name(), "")
        .initial_value(defaults.language)
        .interact()?;

    let module_system: ModuleSystem = cliclack::select("Select module system")
        .item(ModuleSystem::Esm, ModuleSystem::Esm.display_name(), "import/export")
        .item(
            ModuleSystem::CommonJs,
            ModuleSystem::CommonJs.display_name(),
            "require/module.exports",
        )
        .initial_value(defaults.module_system)
        .interact()?;

    let use_src_directory = confirm("Use src directory?", defaults.use_src_directory)?;
    let use_eslint = confirm("Setup ESLint?", defaults.use_eslint)?;
    let use_prettier = confirm("Setup Prettier?", defaults.use_prettier)?;
    let create_gitignore = confirm("Create .gitignore file?", defaults.create_gitignore)?;

    Ok(SetupAnswers {
        project_name,
        language,
        module_system,
        use_src_directory,
        use_eslint,
        use_prettier,
        create_gitignore,
    })
}

fn prompt_project_name() -> Result<ProjectName> {
    let input: String = cliclack::input("Project name")
        .placeholder(CURRENT_DIR)
        .default_input(CURRENT_DIR)
        .validate(|input: &String| ProjectName::parse(input).map(|_| ()))
        .interact()?;

    Ok(ProjectName::parse(&input)?)
}

fn confirm(prompt: &str, initial_value: bool) -> Result<bool> {
    Ok(cliclack::confirm(prompt)
        .initial_value(initial_value)
        .interact()?)
}

fn print_next_steps(
    config: &SetupConfig,
    answers: &SetupAnswers,
    report: &GenerationReport,
) -> Result<()> {
    let steps = generator::next_steps(answers, config, &report.install);

    cliclack::log::success(format!(
        "Project setup complete: {} files in {}",
        report.files.len(),
        report.project_path.display()
    ))?;

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro("Happy coding!")?;

    Ok(())
}
