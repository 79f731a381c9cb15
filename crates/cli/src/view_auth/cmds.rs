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

use std::io::{Error, ErrorKind};

use console::Term;
use ot_location::digest::{auth_line, digest_password};

use super::Opts;
use crate::errors::{CliError, CliResult};

// PasswordPrompt reads a password without echoing it.
pub trait PasswordPrompt {
    fn read_password(&mut self, prompt: &str) -> std::io::Result<String>;
}

// TerminalPrompt prompts on stderr, so stdout only ever carries the
// auth line.
pub struct TerminalPrompt {
    term: Term,
}

impl TerminalPrompt {
    pub fn new(term: Term) -> Self {
        Self { term }
    }

    pub fn stderr() -> Self {
        Self::new(Term::stderr())
    }
}

impl PasswordPrompt for TerminalPrompt {
    // console hands back an empty line when the stream is not a
    // terminal, which would digest an empty password.
    fn read_password(&mut self, prompt: &str) -> std::io::Result<String> {
        if !self.term.is_term() {
            return Err(Error::new(
                ErrorKind::NotConnected,
                "no terminal to read the password from",
            ));
        }
        self.term.write_str(prompt)?;
        self.term.read_secure_line()
    }
}

// view_auth asks for the password twice and returns the auth line
// for the view config.
pub fn view_auth(opts: &Opts, prompt: &mut impl PasswordPrompt) -> CliResult<String> {
    let password =
        prompt.read_password(&format!("Enter password for user {}: ", opts.username))?;
    let confirmation = prompt.read_password("Re-enter password: ")?;
    if password != confirmation {
        return Err(CliError::PasswordMismatch);
    }
    Ok(auth_line(&digest_password(
        &opts.realm,
        &opts.username,
        &password,
    )))
}
