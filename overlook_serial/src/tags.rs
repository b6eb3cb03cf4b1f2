// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tag keys shared by the encoder and decoder.

pub(crate) const TAG_UNDEFINED: &str = "$undefined";
pub(crate) const TAG_DATE: &str = "$date";
pub(crate) const TAG_BIGINT: &str = "$bigint";
pub(crate) const TAG_REGEXP: &str = "$regexp";
pub(crate) const TAG_ERROR: &str = "$error";
pub(crate) const TAG_MAP: &str = "$map";
pub(crate) const TAG_SET: &str = "$set";
pub(crate) const TAG_ITER: &str = "$iter";
pub(crate) const TAG_NUMBER: &str = "$number";
pub(crate) const TAG_LITERAL: &str = "$literal";
