/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
 * SPDX-License-Identifier: LicenseRef-NvidiaProprietary
 *
 * NVIDIA CORPORATION, its affiliates and licensors retain all intellectual
 * property and proprietary rights in and to this material, related
 * documentation and any modifications thereto. Any use, reproduction,
 * disclosure or distribution of this material and related documentation
 * without an express license agreement from NVIDIA CORPORATION or
 * its affiliates is strictly prohibited.
 */

use std::path::PathBuf;

use ot_api_client::DirectoryClient;
use ot_location::CardRecord;
use ot_mqtt::{MqttPublisher, PublishOptions};
use tokio::io::AsyncWrite;
use tracing::info;

use super::Opts;
use crate::cfg::runtime::write_line;
use crate::errors::{CliError, CliResult};

// avatar_path is where the avatar for user is written. User names
// end up in a file name, so path separators are refused.
pub fn avatar_path(opts: &Opts) -> CliResult<PathBuf> {
    let user = opts.user.trim();
    if user.is_empty() || user.contains(['/', '\\']) || user == "." || user == ".." {
        return Err(CliError::InvalidInput(format!(
            "'{}' is not a usable user name",
            opts.user
        )));
    }
    Ok(opts.output_dir.join(format!("{user}.png")))
}

// card fetches the profile and avatar, writes the avatar file and
// prints the card. Nothing is written unless both lookups succeed.
pub async fn card<W>(opts: &Opts, directory: &DirectoryClient, out: &mut W) -> CliResult<CardRecord>
where
    W: AsyncWrite + Unpin + ?Sized,
{
    let path = avatar_path(opts)?;
    let profile = directory.user_profile(opts.user.trim()).await?;
    let image = directory.avatar(&profile.avatar_url, opts.size).await?;

    tokio::fs::write(&path, &image).await?;
    info!(path = %path.display(), bytes = image.len(), "Wrote avatar");

    let card = CardRecord::from_image(profile.name, &image);
    write_line(out, &card.to_json()?).await?;
    Ok(card)
}

// publish_card sends the card retained, so subscribers joining
// later still get it.
pub async fn publish_card(
    publisher: &mut MqttPublisher,
    topic: &str,
    card: &CardRecord,
) -> CliResult<()> {
    publisher
        .publish_with_options(topic, card, PublishOptions::default().with_retain(true))
        .await?;
    info!(topic, "Published card");
    Ok(())
}
