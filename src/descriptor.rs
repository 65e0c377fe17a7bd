// Copyright 2026 Sprite Atlas Compiler Contributors
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! The sidecar JSON document (component J's output shape).

use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Descriptor {
    pub image: String,
    pub image_width: u32,
    pub image_height: u32,
    pub sprites: Vec<SpriteEntry>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SpriteEntry {
    pub name: String,
    pub size: [i32; 2],
    pub sprite_rect: [i32; 4],
    pub sheet_rect: [i32; 4],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mesh: Option<MeshEntry>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct MeshEntry {
    pub num_tris: usize,
    pub num_vertices: usize,
    pub indices: Vec<u16>,
    pub positions: Vec<[i32; 2]>,
    pub uvs: Vec<[i32; 2]>,
}

impl Descriptor {
    /// Serializes to pretty-printed JSON, the form the CLI writes to disk.
    pub fn to_json_string(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mesh_is_omitted_when_absent() {
        let entry = SpriteEntry {
            name: "a.png".into(),
            size: [4, 4],
            sprite_rect: [0, 0, 4, 4],
            sheet_rect: [0, 0, 4, 4],
            mesh: None,
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert!(!json.contains("mesh"));
    }
}
