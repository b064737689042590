//! High-level operations behind the ESROCOS binaries
//!
//! Each operation follows the same shape: load configuration from the
//! project directory, assemble the external command, run it, pass the exit
//! code back. Any configuration failure aborts before anything is written.

use crate::asn1::generator::convert_all;
use crate::asn1::msg::MessageIndex;
use crate::config::{Linkings, ProjectConfig};
use crate::exceptions::Result;
use crate::taste::args::{editor_arguments, ocarina_components, taste_prefix};
use crate::taste::init_script::PreInitScript;
use crate::taste::invoke::run_command;
use log::{debug, info};
use std::env;
use std::path::PathBuf;

/// Name of the project build entry script
const BUILD_SCRIPT: &str = "./build-script.sh";

/// Name of the TASTE editor executable
const TASTE_EDITOR: &str = "TASTE";

/// Name of the skeleton generator executable
const SKELETON_GENERATOR: &str = "taste-generate-skeletons";

/// Options shared by the project-level operations
#[derive(Debug, Default)]
pub struct ProjectOptions {
    /// Project directory (defaults to the current directory)
    pub project_dir: Option<PathBuf>,
}

impl ProjectOptions {
    fn project_dir(&self) -> Result<PathBuf> {
        match &self.project_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(env::current_dir()?),
        }
    }
}

/// Options for the build operation
#[derive(Debug, Default)]
pub struct BuildOptions {
    /// Project directory (defaults to the current directory)
    pub project_dir: Option<PathBuf>,
}

/// Options for ROS message conversion
#[derive(Debug, Default)]
pub struct ConvertOptions {
    /// Output directory for the generated `.asn` files
    pub output_dir: PathBuf,
    /// Additional package roots searched before `ROS_PACKAGE_PATH`
    pub msg_paths: Vec<PathBuf>,
}

/// Run the project build through `build-script.sh`
///
/// Wraps the build with the transient pre-init script carrying the
/// deployment view and orchestrator options, and returns the build's own
/// exit code.
pub fn run_build(options: BuildOptions) -> Result<i32> {
    let project_dir = match options.project_dir {
        Some(dir) => dir,
        None => env::current_dir()?,
    };

    let config = ProjectConfig::load(&project_dir)?;
    let linkings = Linkings::load(&project_dir)?;

    // Kept for parity with the autoproj-driven environment; the build
    // script picks it up from the inherited environment on its own.
    if let Ok(autoproj_root) = env::var("AUTOPROJ_CURRENT_ROOT") {
        debug!("AUTOPROJ_CURRENT_ROOT={autoproj_root}");
    }

    let script = PreInitScript::new(&project_dir);
    script.remove();
    script.write(
        &config.deployment_view(),
        linkings.orchestrator_options().as_deref(),
    )?;

    info!("Building project '{}'", config.project_name);
    let exit_code = run_command(BUILD_SCRIPT, &[], &project_dir);

    // The script is scoped to this build either way
    script.remove();

    exit_code
}

/// Open the TASTE editor on the project
pub fn edit_project(options: ProjectOptions) -> Result<i32> {
    let project_dir = options.project_dir()?;
    let config = ProjectConfig::load(&project_dir)?;
    let aadl_library = ocarina_components(&taste_prefix()?);
    let arguments = editor_arguments(&config, &project_dir, &aadl_library)?;

    info!("Opening TASTE editor for project '{}'", config.project_name);
    run_command(TASTE_EDITOR, &arguments, &project_dir)
}

/// Generate function skeletons from the project interface view
pub fn generate_skeletons(options: ProjectOptions) -> Result<i32> {
    let project_dir = options.project_dir()?;
    let config = ProjectConfig::load(&project_dir)?;
    let interface_view = config.interface_view().to_string_lossy().into_owned();

    info!("Generating skeletons for project '{}'", config.project_name);
    run_command(SKELETON_GENERATOR, &[interface_view], &project_dir)
}

/// Convert ROS messages (and their dependencies) to ASN.1 modules
pub fn convert_messages(messages: &[String], options: ConvertOptions) -> Result<Vec<String>> {
    let index = MessageIndex::new(&options.msg_paths);
    convert_all(&index, messages, &options.output_dir)
}
