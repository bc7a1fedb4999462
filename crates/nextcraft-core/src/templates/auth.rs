//! Auth.js v5 files added to an existing project by `forge add auth`

pub const AUTH_CONFIG: &str = r#"import NextAuth from 'next-auth'
import GitHub from 'next-auth/providers/github'
import Google from 'next-auth/providers/google'
import { PrismaAdapter } from '@auth/prisma-adapter'
import { prisma } from '@/lib/db/prisma'

export const { handlers, auth, signIn, signOut } = NextAuth({
  adapter: PrismaAdapter(prisma),
  providers: [
    GitHub({
      clientId: process.env.GITHUB_CLIENT_ID,
      clientSecret: process.env.GITHUB_CLIENT_SECRET,
    }),
    Google({
      clientId: process.env.GOOGLE_CLIENT_ID,
      clientSecret: process.env.GOOGLE_CLIENT_SECRET,
    }),
  ],
  session: {
    strategy: 'database',
  },
  pages: {
    signIn: '/login',
  },
})
"#;

pub const AUTH_ROUTE: &str = r#"import { handlers } from '@/lib/auth'

export const { GET, POST } = handlers
"#;

/// Schema used when the project has none yet
pub const BASE_SCHEMA: &str = r#"generator client {
  provider = "prisma-client-js"
}

datasource db {
  provider = "sqlite"
  url      = env("DATABASE_URL")
}
"#;

/// Models required by the Prisma adapter, in declaration order
pub const MODELS: &[(&str, &str)] = &[
    (
        "User",
        r#"model User {
  id            String    @id @default(cuid())
  name          String?
  email         String?   @unique
  emailVerified DateTime?
  image         String?
  accounts      Account[]
  sessions      Session[]
  createdAt     DateTime  @default(now())
  updatedAt     DateTime  @updatedAt
}
"#,
    ),
    (
        "Account",
        r#"model Account {
  id                String  @id @default(cuid())
  userId            String
  type              String
  provider          String
  providerAccountId String
  refresh_token     String?
  access_token      String?
  expires_at        Int?
  token_type        String?
  scope             String?
  id_token          String?
  session_state     String?
  user              User    @relation(fields: [userId], references: [id], onDelete: Cascade)

  @@unique([provider, providerAccountId])
}
"#,
    ),
    (
        "Session",
        r#"model Session {
  id           String   @id @default(cuid())
  sessionToken String   @unique
  userId       String
  expires      DateTime
  user         User     @relation(fields: [userId], references: [id], onDelete: Cascade)
}
"#,
    ),
    (
        "VerificationToken",
        r#"model VerificationToken {
  identifier String
  token      String   @unique
  expires    DateTime

  @@unique([identifier, token])
}
"#,
    ),
];

/// Environment placeholders appended to `.env` when missing
pub const ENV_KEYS: &[(&str, &str)] = &[
    ("NEXTAUTH_URL", "http://localhost:3000"),
    ("AUTH_SECRET", "your-secret-key-change-this-in-production"),
    ("GITHUB_CLIENT_ID", ""),
    ("GITHUB_CLIENT_SECRET", ""),
    ("GOOGLE_CLIENT_ID", ""),
    ("GOOGLE_CLIENT_SECRET", ""),
];

/// Whether `schema` already declares `model <name> {`
pub fn declares_model(schema: &str, name: &str) -> bool {
    schema.lines().any(|line| {
        let mut words = line.split_whitespace();
        words.next() == Some("model")
            && words
                .next()
                .map(|w| w.trim_end_matches('{') == name)
                .unwrap_or(false)
    })
}

/// Fields the adapter reads or writes on an existing `User` model.
///
/// `accounts` and `sessions` are the back-relations of `Account.user` and
/// `Session.user`; Prisma rejects the schema without them.
const USER_FIELDS: &[(&str, &str)] = &[
    ("name", "String?"),
    ("email", "String?   @unique"),
    ("emailVerified", "DateTime?"),
    ("image", "String?"),
    ("accounts", "Account[]"),
    ("sessions", "Session[]"),
];

/// Append every model block the schema does not declare yet, and complete
/// a `User` model the schema already had
pub fn merge_models(schema: &str) -> String {
    let mut merged = add_user_fields(schema);
    for (name, block) in MODELS {
        if declares_model(&merged, name) {
            continue;
        }
        if !merged.ends_with('\n') {
            merged.push('\n');
        }
        merged.push('\n');
        merged.push_str(block);
    }
    merged
}

/// Insert the [`USER_FIELDS`] missing from the `User` block before its closing brace
fn add_user_fields(schema: &str) -> String {
    let lines: Vec<&str> = schema.lines().collect();
    let Some(start) = lines.iter().position(|line| declares_model(line, "User")) else {
        return schema.to_string();
    };
    let Some(end) = lines[start..]
        .iter()
        .position(|line| line.trim() == "}")
        .map(|offset| start + offset)
    else {
        return schema.to_string();
    };

    let declared: Vec<&str> = lines[start + 1..end]
        .iter()
        .filter_map(|line| line.split_whitespace().next())
        .collect();
    let missing: Vec<String> = USER_FIELDS
        .iter()
        .filter(|(field, _)| !declared.contains(field))
        .map(|(field, ty)| format!("  {field:<13} {ty}"))
        .collect();
    if missing.is_empty() {
        return schema.to_string();
    }

    let mut out: Vec<String> = lines[..end].iter().map(|l| l.to_string()).collect();
    out.extend(missing);
    out.extend(lines[end..].iter().map(|l| l.to_string()));

    let mut merged = out.join("\n");
    if schema.ends_with('\n') {
        merged.push('\n');
    }
    merged
}

/// Append the auth keys missing from an `.env` file
pub fn merge_env(env: &str) -> String {
    let declared: Vec<&str> = env
        .lines()
        .filter_map(|line| line.split_once('=').map(|(key, _)| key.trim()))
        .collect();

    let mut merged = env.to_string();
    for (key, value) in ENV_KEYS {
        if declared.contains(key) {
            continue;
        }
        if !merged.is_empty() && !merged.ends_with('\n') {
            merged.push('\n');
        }
        merged.push_str(&format!("{key}=\"{value}\"\n"));
    }
    merged
}
