//! Subcommand handlers for tree, ascii and config actions.

use std::error::Error;
use std::path::{Path, PathBuf};

use super::args::ConfigAction;
use crate::ascii::{AsciiConverter, LocalImageDecoder, RemoteImageDecoder};
use crate::client::PortfolioClient;
use crate::config::{default_path, Config, DEFAULT_CONFIG_TOML};
use crate::fs::{is_hidden, FsNode};

/// Build a client for the configured server.
pub fn build_client(config: &Config) -> Result<PortfolioClient, Box<dyn Error>> {
    Ok(PortfolioClient::with_timeout(
        &config.server.url,
        config.server.request_timeout(),
    )?)
}

/// Load the tree from a JSON snapshot, or fetch it from the server.
pub async fn load_tree(
    client: &PortfolioClient,
    snapshot: Option<&Path>,
) -> Result<FsNode, Box<dyn Error>> {
    match snapshot {
        Some(path) => {
            log::info!("Loading tree snapshot from {}", path.display());
            let json = std::fs::read_to_string(path)
                .map_err(|e| format!("Failed to read tree file '{}': {}", path.display(), e))?;
            Ok(FsNode::from_json(&json)?)
        }
        None => Ok(client.fetch_structure().await?),
    }
}

/// Render the tree with `<DIR>`/size columns, indented by depth.
pub fn format_tree(root: &FsNode) -> String {
    let mut out = format!("{}\n", root.name);
    let mut stack: Vec<(&FsNode, usize)> = root
        .children
        .iter()
        .rev()
        .filter(|c| !is_hidden(&c.name))
        .map(|c| (c, 1))
        .collect();

    while let Some((node, depth)) = stack.pop() {
        let indent = "  ".repeat(depth);
        let name_width = 25usize.saturating_sub(indent.len() - 2);
        if node.is_dir() {
            out.push_str(&format!("{}{:<name_width$} <DIR>\n", indent, node.name));
            stack.extend(
                node.children
                    .iter()
                    .rev()
                    .filter(|c| !is_hidden(&c.name))
                    .map(|c| (c, depth + 1)),
            );
        } else {
            out.push_str(&format!("{}{:<name_width$} {} B\n", indent, node.name, node.size));
        }
    }
    out
}

/// `tree` subcommand.
pub async fn print_tree(
    client: &PortfolioClient,
    snapshot: Option<&Path>,
) -> Result<(), Box<dyn Error>> {
    let root = load_tree(client, snapshot).await?;
    print!("{}", format_tree(&root));
    Ok(())
}

/// `ascii` subcommand.
pub async fn print_ascii(
    config: &Config,
    image: &str,
    width: Option<u32>,
    height: Option<u32>,
    remote: bool,
) -> Result<(), Box<dyn Error>> {
    let width = width.unwrap_or(config.ascii.image_width);
    let height = height.unwrap_or(config.ascii.image_height);
    let converter = AsciiConverter::new(config.ascii.timeout());

    let art = if remote {
        let decoder = RemoteImageDecoder::new(build_client(config)?);
        converter.convert(&decoder, image, width, height).await
    } else {
        let decoder = LocalImageDecoder::new(PathBuf::from("."));
        converter.convert(&decoder, image, width, height).await
    };
    print!("{}", art);
    Ok(())
}

/// Handle config subcommand actions.
pub fn handle_config_action(action: ConfigAction, config: &Config, path: Option<&Path>) {
    let config_path = path.map(PathBuf::from).unwrap_or_else(default_path);

    match action {
        ConfigAction::Show => {
            println!("Current configuration:");
            match config.to_toml() {
                Ok(text) => println!("{}", text),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }

            if config_path.exists() {
                println!("Config file: {} (exists)", config_path.display());
            } else {
                println!("Config file: {} (not found)", config_path.display());
            }
        }
        ConfigAction::Init => {
            if config_path.exists() {
                eprintln!("Config file already exists: {}", config_path.display());
                eprintln!("Use 'portfolio-term config show' to view current settings.");
                std::process::exit(1);
            }

            if let Err(e) = write_default_config(&config_path) {
                eprintln!("Error writing config file: {}", e);
                std::process::exit(1);
            }

            println!("Created config file: {}", config_path.display());
        }
    }
}

/// Write the default config, creating parent directories as needed.
pub fn write_default_config(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, DEFAULT_CONFIG_TOML)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_tree_hides_git_and_indents() {
        let root = FsNode::dir(
            "portfolio",
            vec![
                FsNode::dir(".git", vec![FsNode::file("HEAD", 1)]),
                FsNode::dir("projects", vec![FsNode::file("a.rs", 10)]),
                FsNode::file("readme.txt", 5),
            ],
        );
        let text = format_tree(&root);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "portfolio");
        assert_eq!(lines[1], format!("  {:<25} <DIR>", "projects"));
        assert_eq!(lines[2], format!("    {:<23} 10 B", "a.rs"));
        assert_eq!(lines[3], format!("  {:<25} 5 B", "readme.txt"));
        assert!(!text.contains(".git"));
    }

    #[test]
    fn test_write_default_config_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/dir/config.toml");
        write_default_config(&path).unwrap();
        let loaded = Config::load(Some(&path)).unwrap();
        assert_eq!(loaded, Config::default());
    }

    #[tokio::test]
    async fn test_load_tree_from_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tree.json");
        std::fs::write(
            &path,
            r#"{"name":"root","type":"dir","children":[{"name":"a.txt","type":"file","size":3}]}"#,
        )
        .unwrap();

        let client = PortfolioClient::new("http://127.0.0.1:9").unwrap();
        let root = load_tree(&client, Some(&path)).await.unwrap();
        assert_eq!(root.children.len(), 1);
        assert_eq!(root.children[0].name, "a.txt");
    }
}
