use crate::cli::{
    actions::{client, read_uploads, render_post},
    globals::GlobalArgs,
};
use anyhow::{Context, Result};
use postboard_core::{
    forms::{NewPost, PostUpdate},
    model::PostId,
};
use std::path::PathBuf;
use tracing::info;

#[derive(Debug)]
pub enum Command {
    Show(PostId),
    Create {
        name: String,
        description: String,
        images: Vec<PathBuf>,
    },
    Update {
        id: PostId,
        name: Option<String>,
        description: Option<String>,
        images: Vec<PathBuf>,
        delete_images: Vec<String>,
    },
    Delete(PostId),
}

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
    pub command: Command,
}

/// # Errors
/// Returns an error if validation, reading an image or the request fails.
pub async fn execute(args: Args) -> Result<()> {
    let client = client(&args.globals)?;

    match args.command {
        Command::Show(id) => {
            let post = client
                .get_post(id)
                .await
                .with_context(|| format!("unable to load post {id}"))?;
            println!("{}", render_post(&client, &post, None));
        }
        Command::Create {
            name,
            description,
            images,
        } => {
            let form = NewPost {
                name,
                description,
                images: read_uploads(&images).await?,
            };
            client
                .create_post(form)
                .await
                .context("unable to create post")?;
            println!("Post created");
        }
        Command::Update {
            id,
            name,
            description,
            images,
            delete_images,
        } => {
            let current = client
                .get_post(id)
                .await
                .with_context(|| format!("unable to load post {id}"))?;

            let mut form = PostUpdate::from_post(&current);
            if let Some(name) = name {
                form.name = name;
            }
            if let Some(description) = description {
                form.description = description;
            }
            for image in &delete_images {
                if !form.is_marked(image) {
                    form.toggle_delete(image);
                }
            }
            form.new_images = read_uploads(&images).await?;

            client
                .update_post(id, form)
                .await
                .with_context(|| format!("unable to update post {id}"))?;
            println!("Post {id} updated");
        }
        Command::Delete(id) => {
            client
                .delete_post(id)
                .await
                .with_context(|| format!("unable to delete post {id}"))?;
            info!(post_id = id, "post deleted");
            println!("Post {id} deleted");
        }
    }

    Ok(())
}
