//! License registry and fuzzy license matching.
//!
//! Only the canonical keys, a display title and a short notice live here;
//! full license texts are out of scope.

/// A license the generator knows how to stamp into `LICENSE.txt`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LicenseDef {
    /// Canonical key as accepted by `--license`.
    pub key: &'static str,
    pub title: &'static str,
    /// Trove classifier used in `setup.cfg`.
    pub classifier: &'static str,
    pub notice: &'static str,
}

pub const DEFAULT_LICENSE: &str = "mit";

const PROPRIETARY_NOTICE: &str = "All rights reserved.";

/// Registry order matters: ties in [`best_fit_license`] go to the earlier key.
pub static LICENSES: &[LicenseDef] = &[
    LicenseDef {
        key: "affero",
        title: "GNU Affero General Public License v3.0",
        classifier: "License :: OSI Approved :: GNU Affero General Public License v3",
        notice: "This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License, version 3.",
    },
    LicenseDef {
        key: "apache",
        title: "Apache License 2.0",
        classifier: "License :: OSI Approved :: Apache Software License",
        notice: "Licensed under the Apache License, Version 2.0. See http://www.apache.org/licenses/LICENSE-2.0",
    },
    LicenseDef {
        key: "artistic",
        title: "Artistic License 2.0",
        classifier: "License :: OSI Approved :: Artistic License",
        notice: "Everyone is permitted to copy and distribute verbatim copies of this license document, but changing it is not allowed.",
    },
    LicenseDef {
        key: "cc0",
        title: "Creative Commons Zero v1.0 Universal",
        classifier: "License :: CC0 1.0 Universal (CC0 1.0) Public Domain Dedication",
        notice: "To the extent possible under law, the author has waived all copyright and related or neighboring rights to this work.",
    },
    LicenseDef {
        key: "eclipse",
        title: "Eclipse Public License 1.0",
        classifier: "License :: OSI Approved :: Eclipse Public License 1.0 (EPL-1.0)",
        notice: "The accompanying program is provided under the terms of the Eclipse Public License v1.0.",
    },
    LicenseDef {
        key: "gpl2",
        title: "GNU General Public License v2.0",
        classifier: "License :: OSI Approved :: GNU General Public License v2 (GPLv2)",
        notice: "This program is free software; you can redistribute it and/or modify it under the terms of the GNU General Public License, version 2.",
    },
    LicenseDef {
        key: "gpl3",
        title: "GNU General Public License v3.0",
        classifier: "License :: OSI Approved :: GNU General Public License v3 (GPLv3)",
        notice: "This program is free software: you can redistribute it and/or modify it under the terms of the GNU General Public License, version 3.",
    },
    LicenseDef {
        key: "isc",
        title: "ISC License",
        classifier: "License :: OSI Approved :: ISC License (ISCL)",
        notice: "Permission to use, copy, modify, and/or distribute this software for any purpose with or without fee is hereby granted.",
    },
    LicenseDef {
        key: "lgpl2",
        title: "GNU Lesser General Public License v2.1",
        classifier: "License :: OSI Approved :: GNU Lesser General Public License v2 (LGPLv2)",
        notice: "This library is free software; you can redistribute it and/or modify it under the terms of the GNU Lesser General Public License, version 2.1.",
    },
    LicenseDef {
        key: "lgpl3",
        title: "GNU Lesser General Public License v3.0",
        classifier: "License :: OSI Approved :: GNU Lesser General Public License v3 (LGPLv3)",
        notice: "This library is free software: you can redistribute it and/or modify it under the terms of the GNU Lesser General Public License, version 3.",
    },
    LicenseDef {
        key: "mit",
        title: "The MIT License (MIT)",
        classifier: "License :: OSI Approved :: MIT License",
        notice: "Permission is hereby granted, free of charge, to any person obtaining a copy of this software, to deal in the Software without restriction.",
    },
    LicenseDef {
        key: "mozilla",
        title: "Mozilla Public License 2.0",
        classifier: "License :: OSI Approved :: Mozilla Public License 2.0 (MPL 2.0)",
        notice: "This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.",
    },
    LicenseDef {
        key: "new-bsd",
        title: "BSD 3-Clause \"New\" License",
        classifier: "License :: OSI Approved :: BSD License",
        notice: "Redistribution and use in source and binary forms, with or without modification, are permitted provided that the conditions of the 3-clause BSD license are met.",
    },
    LicenseDef {
        key: "none",
        title: "No License",
        classifier: "License :: Other/Proprietary License",
        notice: PROPRIETARY_NOTICE,
    },
    LicenseDef {
        key: "proprietary",
        title: "Proprietary License",
        classifier: "License :: Other/Proprietary License",
        notice: PROPRIETARY_NOTICE,
    },
    LicenseDef {
        key: "public-domain",
        title: "Public Domain",
        classifier: "License :: Public Domain",
        notice: "This is free and unencumbered software released into the public domain.",
    },
    LicenseDef {
        key: "simple-bsd",
        title: "BSD 2-Clause \"Simplified\" License",
        classifier: "License :: OSI Approved :: BSD License",
        notice: "Redistribution and use in source and binary forms, with or without modification, are permitted provided that the conditions of the 2-clause BSD license are met.",
    },
];

/// Look up a license by canonical key.
pub fn find_license(key: &str) -> Option<&'static LicenseDef> {
    LICENSES.iter().find(|def| def.key == key)
}

/// All canonical keys in registry order.
pub fn license_keys() -> impl Iterator<Item = &'static str> {
    LICENSES.iter().map(|def| def.key)
}

/// Classic edit distance (insertions, deletions, substitutions) over chars.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    // Single rolling row: row[j] is the distance between the processed
    // prefix of `a` and the first `j` chars of `b`.
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let above = row[j + 1];
            let cost = usize::from(ca != *cb);
            row[j + 1] = (above + 1).min(row[j] + 1).min(diagonal + cost);
            diagonal = above;
        }
    }

    row[b.len()]
}

/// Map a free-form license name to the nearest canonical key.
pub fn best_fit_license(token: &str) -> &'static str {
    let token = token.trim().to_lowercase();

    // `min_by_key` keeps the last minimum; fold keeps the first.
    LICENSES
        .iter()
        .map(|def| (def.key, levenshtein(&token, def.key)))
        .fold(None, |best: Option<(&'static str, usize)>, candidate| match best {
            Some(current) if current.1 <= candidate.1 => Some(current),
            _ => Some(candidate),
        })
        .map_or(DEFAULT_LICENSE, |(key, _)| key)
}
