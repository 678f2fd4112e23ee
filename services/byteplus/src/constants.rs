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

use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;

// Signing algorithm and scope terminator.
pub const ALGORITHM: &str = "HMAC-SHA256";
pub const V4_IDENTIFIER: &str = "request";

// Headers used in byteplus services.
pub const X_DATE: &str = "x-date";
pub const X_SECURITY_TOKEN: &str = "x-security-token";
pub const X_CONTENT_SHA256: &str = "x-content-sha256";

/// Headers that never take part in the signature.
pub const UNSIGNABLE_HEADERS: [&str; 6] = [
    "authorization",
    "content-type",
    "content-length",
    "user-agent",
    "presigned-expires",
    "expect",
];

// Env values used in byteplus services.
pub const BYTEPLUS_ACCESS_KEY_ID: &str = "BYTEPLUS_ACCESS_KEY_ID";
pub const BYTEPLUS_SECRET_ACCESS_KEY: &str = "BYTEPLUS_SECRET_ACCESS_KEY";
pub const BYTEPLUS_SESSION_TOKEN: &str = "BYTEPLUS_SESSION_TOKEN";

/// AsciiSet for query escaping.
///
/// Every byte except the unreserved characters 'A'-'Z', 'a'-'z', '0'-'9', '-', '.', '_'
/// and '~' is encoded, so `*`, `!`, `'`, `(` and `)` are escaped too.
pub static BYTEPLUS_QUERY_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');
