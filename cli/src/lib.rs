/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod book;
pub mod commands;
pub mod config;
pub mod filter;
pub mod forms;
pub mod input;
pub mod session;
