//! Prisma, NextAuth and API route files for fullstack projects

use super::render;
use crate::error::Result;
use crate::options::Database;
use serde_json::json;

const ENV: &str = r#"DATABASE_URL="{{database_url}}"
{{#if auth}}NEXTAUTH_URL="http://localhost:3000"
AUTH_SECRET="your-secret-key-change-this-in-production"
GITHUB_CLIENT_ID=""
GITHUB_CLIENT_SECRET=""
GOOGLE_CLIENT_ID=""
GOOGLE_CLIENT_SECRET=""
{{/if}}"#;

const ENV_EXAMPLE: &str = r#"DATABASE_URL="{{database_url}}"
NEXT_PUBLIC_API_URL="http://localhost:3000/api"
NEXT_PUBLIC_SITE_URL="http://localhost:3000"
{{#if auth}}NEXTAUTH_URL="http://localhost:3000"
AUTH_SECRET=""
GITHUB_CLIENT_ID=""
GITHUB_CLIENT_SECRET=""
GOOGLE_CLIENT_ID=""
GOOGLE_CLIENT_SECRET=""
{{/if}}"#;

const SCHEMA_HEADER: &str = r#"generator client {
  provider = "prisma-client-js"
}

datasource db {
  provider = "{{provider}}"
  url      = env("DATABASE_URL")
}
"#;

pub const AUTH_MODELS: &str = r#"model User {
  id            String    @id @default(cuid())
  name          String?
  email         String    @unique
  emailVerified DateTime?
  image         String?
  password      String?
  accounts      Account[]
  sessions      Session[]
  createdAt     DateTime  @default(now())
  updatedAt     DateTime  @updatedAt
}

model Account {
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

model Session {
  id           String   @id @default(cuid())
  sessionToken String   @unique
  userId       String
  expires      DateTime
  user         User     @relation(fields: [userId], references: [id], onDelete: Cascade)
}

model VerificationToken {
  identifier String
  token      String   @unique
  expires    DateTime

  @@unique([identifier, token])
}

model Post {
  id        String   @id @default(cuid())
  title     String
  content   String?
  published Boolean  @default(false)
  authorId  String
  createdAt DateTime @default(now())
  updatedAt DateTime @updatedAt
}
"#;

pub const BASIC_MODELS: &str = r#"model User {
  id        String   @id @default(cuid())
  email     String   @unique
  name      String?
  createdAt DateTime @default(now())
  updatedAt DateTime @updatedAt
}

model Post {
  id        String   @id @default(cuid())
  title     String
  content   String?
  published Boolean  @default(false)
  createdAt DateTime @default(now())
  updatedAt DateTime @updatedAt
}
"#;

pub const PRISMA_CLIENT: &str = r#"import { PrismaClient } from '@prisma/client'

const globalForPrisma = globalThis as unknown as {
  prisma: PrismaClient | undefined
}

export const prisma = globalForPrisma.prisma ?? new PrismaClient()

if (process.env.NODE_ENV !== 'production') globalForPrisma.prisma = prisma
"#;

pub const AUTH_OPTIONS: &str = r#"import { NextAuthOptions } from 'next-auth'
import CredentialsProvider from 'next-auth/providers/credentials'
import { PrismaAdapter } from '@auth/prisma-adapter'
import { prisma } from '@/lib/db/prisma'
import bcrypt from 'bcryptjs'

export const authOptions: NextAuthOptions = {
  adapter: PrismaAdapter(prisma) as NextAuthOptions['adapter'],
  session: {
    strategy: 'jwt',
  },
  pages: {
    signIn: '/login',
  },
  providers: [
    CredentialsProvider({
      name: 'credentials',
      credentials: {
        email: { label: 'Email', type: 'email' },
        password: { label: 'Password', type: 'password' },
      },
      async authorize(credentials) {
        if (!credentials?.email || !credentials?.password) {
          throw new Error('Invalid credentials')
        }

        const user = await prisma.user.findUnique({
          where: { email: credentials.email },
        })

        if (!user || !user.password) {
          throw new Error('Invalid credentials')
        }

        const isPasswordValid = await bcrypt.compare(credentials.password, user.password)

        if (!isPasswordValid) {
          throw new Error('Invalid credentials')
        }

        return {
          id: user.id,
          email: user.email,
          name: user.name,
        }
      },
    }),
  ],
  callbacks: {
    async session({ token, session }) {
      if (token && session.user) {
        session.user.name = token.name
        session.user.email = token.email
      }
      return session
    },
    async jwt({ token, user }) {
      if (user) {
        token.id = user.id
        token.email = user.email
        token.name = user.name
      }
      return token
    },
  },
}
"#;

pub const NEXTAUTH_ROUTE: &str = r#"import NextAuth from 'next-auth'
import { authOptions } from '@/lib/auth/auth-options'

const handler = NextAuth(authOptions)

export { handler as GET, handler as POST }
"#;

pub const HEALTH_ROUTE: &str = r#"import { NextResponse } from 'next/server'

export async function GET() {
  return NextResponse.json({
    status: 'ok',
    timestamp: new Date().toISOString(),
  })
}
"#;

pub const USERS_ROUTE: &str = r#"import { NextRequest, NextResponse } from 'next/server'
import { prisma } from '@/lib/db/prisma'

export async function GET() {
  try {
    const users = await prisma.user.findMany({
      select: {
        id: true,
        email: true,
        name: true,
        createdAt: true,
      },
    })

    return NextResponse.json(users)
  } catch {
    return NextResponse.json({ error: 'Failed to fetch users' }, { status: 500 })
  }
}

export async function POST(request: NextRequest) {
  try {
    const { email, name } = await request.json()

    if (!email) {
      return NextResponse.json({ error: 'Email is required' }, { status: 400 })
    }

    const user = await prisma.user.create({
      data: { email, name },
    })

    return NextResponse.json(user, { status: 201 })
  } catch {
    return NextResponse.json({ error: 'Failed to create user' }, { status: 500 })
  }
}
"#;

pub fn env(database: Database, auth: bool) -> Result<String> {
    render(
        ".env",
        ENV,
        &json!({ "database_url": database.connection_url(), "auth": auth }),
    )
}

pub fn env_example(database: Database, auth: bool) -> Result<String> {
    render(
        ".env.example",
        ENV_EXAMPLE,
        &json!({ "database_url": database.connection_url(), "auth": auth }),
    )
}

/// `generator` and `datasource` blocks for the given provider
pub fn schema_header(provider: &str) -> Result<String> {
    render(
        "prisma/schema.prisma",
        SCHEMA_HEADER,
        &json!({ "provider": provider }),
    )
}

/// Full schema: header followed by the auth or basic model set
pub fn schema(database: Database, auth: bool) -> Result<String> {
    let mut schema = schema_header(database.prisma_provider())?;
    schema.push('\n');
    schema.push_str(if auth { AUTH_MODELS } else { BASIC_MODELS });
    Ok(schema)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_auth_keys_are_conditional() {
        let plain = env(Database::Sqlite, false).unwrap();
        assert_eq!(plain, "DATABASE_URL=\"file:./dev.db\"\n");

        let with_auth = env(Database::Postgres, true).unwrap();
        assert!(with_auth.starts_with("DATABASE_URL=\"postgresql://"));
        assert!(with_auth.contains("AUTH_SECRET="));
        assert!(with_auth.contains("GITHUB_CLIENT_ID="));
    }

    #[test]
    fn test_schema_uses_provider() {
        let out = schema(Database::Mysql, false).unwrap();
        assert!(out.contains("provider = \"mysql\""));
        assert!(out.contains("model Post {"));
        assert!(!out.contains("model Account {"));
    }
}
