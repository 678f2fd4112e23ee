// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! SHA256 and HMAC-SHA256 helpers used to build signatures.

use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

type HmacSha256 = Hmac<Sha256>;

/// Hex encoded SHA256 of the empty payload.
pub const EMPTY_SHA256: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

/// Lower-case hex SHA256 digest of `content`.
pub fn hex_sha256(content: &[u8]) -> String {
    hex::encode(Sha256::digest(content))
}

fn keyed(key: &[u8], content: &[u8]) -> HmacSha256 {
    // SAFETY: HMAC accepts keys of any length, new_from_slice never fails.
    let mut mac = HmacSha256::new_from_slice(key).unwrap();
    mac.update(content);
    mac
}

/// Raw HMAC-SHA256 of `content` under `key`.
///
/// The output is meant to be fed as the key of the next round, see the
/// signing key derivation.
pub fn hmac_sha256(key: &[u8], content: &[u8]) -> Vec<u8> {
    keyed(key, content).finalize().into_bytes().to_vec()
}

/// Lower-case hex HMAC-SHA256 of `content` under `key`.
pub fn hex_hmac_sha256(key: &[u8], content: &[u8]) -> String {
    hex::encode(keyed(key, content).finalize().into_bytes())
}
