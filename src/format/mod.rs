// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Metazoom-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Metazoom and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Model-file formats.

pub mod sbml;
