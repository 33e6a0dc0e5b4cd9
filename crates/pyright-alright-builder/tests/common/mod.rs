//! Test helpers: a fake GitHub backed by wiremock, zip fixtures and a
//! scripted step runner.
//!
//! Shared with the `pyright-alright` binary tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::io::{Cursor, Write};

use pyright_alright_builder::{BuildError, BuildStep, StepKind, StepRunner};
use pyright_alright_core::layout::{DIST_DIR, ENTRY_SCRIPT};
use pyright_alright_core::RuntimeCommand;
use tokio::runtime::Runtime;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const REPO: &str = "microsoft/pyright";

/// GitHub stand-in for the blocking ureq calls under test. Unmounted paths
/// answer 404.
pub struct FakeGithub {
    server: MockServer,
    runtime: Runtime,
}

impl FakeGithub {
    pub fn start() -> Self {
        let runtime = Runtime::new().unwrap();
        let server = runtime.block_on(MockServer::start());
        Self { server, runtime }
    }

    /// Base URL, e.g. `http://127.0.0.1:41234`.
    pub fn uri(&self) -> String {
        self.server.uri()
    }

    pub fn respond(&self, route: &str, response: ResponseTemplate) {
        self.runtime.block_on(
            Mock::given(method("GET"))
                .and(path(route))
                .respond_with(response)
                .mount(&self.server),
        );
    }

    /// Serve `body` as the source archive of `tag`.
    pub fn archive(&self, tag: &str, body: Vec<u8>) {
        self.respond(
            &format!("/{REPO}/archive/refs/tags/{tag}.zip"),
            ResponseTemplate::new(200)
                .insert_header("Content-Type", "application/zip")
                .set_body_bytes(body),
        );
    }

    /// Answer `releases/latest` with a redirect to the tag page of `tag`.
    /// The tag page itself is not served.
    pub fn latest_redirects_to(&self, tag: &str) {
        let location = format!("{}/{REPO}/releases/tag/{tag}", self.uri());
        self.latest_responds(ResponseTemplate::new(302).insert_header("Location", location));
    }

    pub fn latest_responds(&self, response: ResponseTemplate) {
        self.respond(&format!("/{REPO}/releases/latest"), response);
    }
}

/// Zip shaped like a GitHub source archive of `pyright-<version>`.
pub fn source_archive(version: &str) -> Vec<u8> {
    use zip::write::FileOptions;
    let root = format!("pyright-{version}");
    let mut buf = Cursor::new(Vec::new());
    {
        let mut zw = zip::ZipWriter::new(&mut buf);
        zw.add_directory(format!("{root}/"), FileOptions::default()).unwrap();
        zw.start_file(format!("{root}/package.json"), FileOptions::default())
            .unwrap();
        zw.write_all(b"{\"name\": \"pyright-root\"}").unwrap();
        zw.add_directory(format!("{root}/packages/pyright/"), FileOptions::default())
            .unwrap();
        zw.start_file(format!("{root}/packages/pyright/package.json"), FileOptions::default())
            .unwrap();
        zw.write_all(b"{\"name\": \"pyright\"}").unwrap();
        zw.finish().unwrap();
    }
    buf.into_inner()
}

/// Runner that records steps, returns scripted exit codes (default 0) and,
/// on a successful build step, writes `dist/` and `index.js` like the real
/// build does.
pub struct FakeBun {
    codes: RefCell<HashMap<StepKind, i32>>,
    pub seen: RefCell<Vec<BuildStep>>,
}

impl FakeBun {
    pub fn succeeding() -> Self {
        Self {
            codes: RefCell::new(HashMap::new()),
            seen: RefCell::new(Vec::new()),
        }
    }

    pub fn failing(kind: StepKind, code: i32) -> Self {
        let runner = Self::succeeding();
        runner.codes.borrow_mut().insert(kind, code);
        runner
    }

    pub fn kinds(&self) -> Vec<StepKind> {
        self.seen.borrow().iter().map(|s| s.kind).collect()
    }
}

impl StepRunner for FakeBun {
    fn run(&self, _runtime: &RuntimeCommand, step: &BuildStep) -> Result<i32, BuildError> {
        self.seen.borrow_mut().push(step.clone());
        assert!(step.cwd.is_dir(), "step cwd {} must exist", step.cwd.display());
        let code = self.codes.borrow().get(&step.kind).copied().unwrap_or(0);
        if code == 0 && step.kind == StepKind::Build {
            let dist = step.cwd.join(DIST_DIR);
            fs::create_dir_all(dist.join("typeshed-fallback")).unwrap();
            fs::write(dist.join("pyright.js"), "// bundle").unwrap();
            fs::write(dist.join("typeshed-fallback/VERSIONS"), "builtins: 3.0-").unwrap();
            fs::write(step.cwd.join(ENTRY_SCRIPT), "require('./dist/pyright')").unwrap();
        }
        Ok(code)
    }
}
