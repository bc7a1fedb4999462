use nextcraft_core::{Database, Generator, Mode, ProjectOptions, SilentReporter, UiLibrary};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use walkdir::WalkDir;

fn options(path: &Path, mode: Mode, database: Option<Database>) -> ProjectOptions {
    ProjectOptions::new("demo", mode, UiLibrary::Shadcn, database, path.to_path_buf())
        .unwrap()
        .0
}

async fn generate(options: &ProjectOptions) {
    Generator::for_project(options)
        .run(&options.path, &SilentReporter)
        .await
        .unwrap();
}

fn read(root: &Path, relative: &str) -> String {
    std::fs::read_to_string(root.join(relative)).unwrap()
}

fn snapshot(root: &Path) -> BTreeMap<PathBuf, Vec<u8>> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            let relative = e.path().strip_prefix(root).unwrap().to_path_buf();
            (relative, std::fs::read(e.path()).unwrap())
        })
        .collect()
}

fn count_models(schema: &str, name: &str) -> usize {
    schema
        .lines()
        .filter(|line| line.trim_start().starts_with(&format!("model {name} ")))
        .count()
}

#[tokio::test]
async fn frontend_generation_is_repeatable() {
    let tmp = TempDir::new().unwrap();
    let opts = options(tmp.path(), Mode::Frontend, None);

    generate(&opts).await;
    let first = snapshot(tmp.path());
    generate(&opts).await;
    let second = snapshot(tmp.path());

    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[tokio::test]
async fn frontend_layout_and_directories() {
    let tmp = TempDir::new().unwrap();
    generate(&options(tmp.path(), Mode::Frontend, None)).await;

    for dir in ["src/app", "src/components", "src/lib", "src/hooks"] {
        assert!(tmp.path().join(dir).is_dir(), "missing {dir}");
    }
    assert!(!tmp.path().join("prisma").exists());

    let layout = read(tmp.path(), "src/app/layout.tsx");
    assert!(layout.contains("openGraph"));
    assert!(!layout.contains("dir=\"rtl\""));
    assert!(tmp.path().join("src/app/sitemap.ts").is_file());
}

#[tokio::test]
async fn rtl_layout() {
    let tmp = TempDir::new().unwrap();
    let opts = options(tmp.path(), Mode::Frontend, None).with_rtl(true);
    generate(&opts).await;

    let layout = read(tmp.path(), "src/app/layout.tsx");
    assert!(layout.contains("dir=\"rtl\""));
}

#[tokio::test]
async fn seo_can_be_disabled() {
    let tmp = TempDir::new().unwrap();
    let opts = options(tmp.path(), Mode::Frontend, None).with_seo(false);
    generate(&opts).await;

    let layout = read(tmp.path(), "src/app/layout.tsx");
    assert!(!layout.contains("openGraph"));
    assert!(!tmp.path().join("src/app/sitemap.ts").exists());
}

#[tokio::test]
async fn fullstack_auth_schema_has_adapter_models() {
    let tmp = TempDir::new().unwrap();
    let opts = options(tmp.path(), Mode::Fullstack, Some(Database::Postgres)).with_auth(true);
    generate(&opts).await;

    let schema = read(tmp.path(), "prisma/schema.prisma");
    for model in ["User", "Account", "Session", "VerificationToken"] {
        assert_eq!(count_models(&schema, model), 1, "model {model}");
    }
    assert!(tmp
        .path()
        .join("src/app/api/auth/[...nextauth]/route.ts")
        .is_file());

    let manifest = read(tmp.path(), "package.json");
    assert!(manifest.contains("\"next-auth\""));
}

#[tokio::test]
async fn fullstack_without_auth_has_user_and_post() {
    let tmp = TempDir::new().unwrap();
    generate(&options(tmp.path(), Mode::Fullstack, Some(Database::Sqlite))).await;

    let schema = read(tmp.path(), "prisma/schema.prisma");
    assert_eq!(count_models(&schema, "User"), 1);
    assert_eq!(count_models(&schema, "Post"), 1);
    assert_eq!(count_models(&schema, "Account"), 0);
    assert_eq!(count_models(&schema, "Session"), 0);

    let manifest = read(tmp.path(), "package.json");
    assert!(!manifest.contains("\"next-auth\""));
}

#[tokio::test]
async fn database_url_matches_provider() {
    let cases = [
        (Database::Postgres, "postgresql://", "postgresql"),
        (Database::Sqlite, "file:", "sqlite"),
        (Database::Mysql, "mysql://", "mysql"),
    ];

    for (database, scheme, provider) in cases {
        let tmp = TempDir::new().unwrap();
        generate(&options(tmp.path(), Mode::Fullstack, Some(database))).await;

        let env = read(tmp.path(), ".env");
        assert!(
            env.contains(&format!("DATABASE_URL=\"{scheme}")),
            "{database}: {env}"
        );
        let schema = read(tmp.path(), "prisma/schema.prisma");
        assert!(schema.contains(&format!("provider = \"{provider}\"")));
    }
}

#[tokio::test]
async fn existing_package_json_fields_survive() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(
        tmp.path().join("package.json"),
        "{\n  \"name\": \"kept\",\n  \"license\": \"MIT\"\n}\n",
    )
    .unwrap();
    generate(&options(tmp.path(), Mode::Frontend, None)).await;

    let manifest = read(tmp.path(), "package.json");
    assert!(manifest.contains("\"name\": \"kept\""));
    assert!(manifest.contains("\"license\": \"MIT\""));
    assert!(manifest.contains("\"next\""));
}
