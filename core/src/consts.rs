/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use std::ops::RangeInclusive;

pub const PORT_RANGE: RangeInclusive<usize> = 1..=65535;

pub const DEFAULT_PORT: u16 = 8082;
pub const DEFAULT_SUPABASE_TABLE: &str = "recipes";

/// Path prefix of the hosted datastore's table interface.
pub const SUPABASE_REST_PATH: &str = "rest/v1";
