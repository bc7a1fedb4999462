//! Files shared by every project: Next.js config, app shell, API client

use super::render;
use crate::error::Result;
use crate::options::{ProjectOptions, UiLibrary};
use serde_json::json;

pub const NEXT_CONFIG: &str = r#"import type { NextConfig } from 'next'

const nextConfig: NextConfig = {
  reactStrictMode: true,
  cacheComponents: true,
  reactCompiler: true,
  turbopack: {
    resolveAlias: {},
  },
  images: {
    formats: ['image/avif', 'image/webp'],
    remotePatterns: [],
  },
  async headers() {
    return [
      {
        source: '/(.*)',
        headers: [
          { key: 'X-Frame-Options', value: 'DENY' },
          { key: 'X-Content-Type-Options', value: 'nosniff' },
          { key: 'Referrer-Policy', value: 'strict-origin-when-cross-origin' },
        ],
      },
    ]
  },
}

export default nextConfig
"#;

pub const TSCONFIG: &str = r#"{
  "compilerOptions": {
    "target": "ES2022",
    "lib": ["DOM", "DOM.Iterable", "ES2022"],
    "allowJs": false,
    "skipLibCheck": true,
    "strict": true,
    "noEmit": true,
    "esModuleInterop": true,
    "module": "ESNext",
    "moduleResolution": "Bundler",
    "resolveJsonModule": true,
    "isolatedModules": true,
    "jsx": "preserve",
    "incremental": true,
    "plugins": [{ "name": "next" }],
    "paths": {
      "@/*": ["./src/*"]
    }
  },
  "include": ["next-env.d.ts", "**/*.ts", "**/*.tsx", ".next/types/**/*.ts"],
  "exclude": ["node_modules"]
}
"#;

pub const NEXT_ENV: &str = r#"/// <reference types="next" />
/// <reference types="next/image-types/global" />

// NOTE: This file should not be edited
// see https://nextjs.org/docs/app/api-reference/config/typescript for more information.
"#;

pub const POSTCSS_CONFIG: &str = r#"const config = {
  plugins: {
    '@tailwindcss/postcss': {},
  },
}

export default config
"#;

pub const GLOBALS_CSS: &str = r#"@import 'tailwindcss';

:root {
  --background: #ffffff;
  --foreground: #171717;
}

@media (prefers-color-scheme: dark) {
  :root {
    --background: #0a0a0a;
    --foreground: #ededed;
  }
}

body {
  color: var(--foreground);
  background: var(--background);
}
"#;

pub const GITIGNORE: &str = r#"# dependencies
/node_modules
/.pnp
.pnp.*

# testing
/coverage

# next.js
/.next/
/out/

# production
/build

# misc
.DS_Store
*.pem

# debug
npm-debug.log*
yarn-debug.log*
yarn-error.log*

# env files
.env
.env*.local

# typescript
*.tsbuildinfo
next-env.d.ts
"#;

pub const ENV_EXAMPLE: &str = r#"NEXT_PUBLIC_API_URL="http://localhost:3000/api"
NEXT_PUBLIC_SITE_URL="http://localhost:3000"
"#;

pub const UTILS: &str = r#"import { clsx, type ClassValue } from 'clsx'
import { twMerge } from 'tailwind-merge'

export function cn(...inputs: ClassValue[]) {
  return twMerge(clsx(inputs))
}
"#;

pub const SHADCN_COMPONENTS_JSON: &str = r#"{
  "$schema": "https://ui.shadcn.com/schema.json",
  "style": "new-york",
  "rsc": true,
  "tsx": true,
  "tailwind": {
    "config": "",
    "css": "src/app/globals.css",
    "baseColor": "neutral",
    "cssVariables": true
  },
  "aliases": {
    "components": "@/components",
    "utils": "@/lib/utils",
    "ui": "@/components/ui",
    "lib": "@/lib",
    "hooks": "@/hooks"
  },
  "iconLibrary": "lucide"
}
"#;

const SITE_CONFIG: &str = r#"export const siteConfig = {
  name: '{{name}}',
  description: 'Built with NextCraft',
  url: process.env.NEXT_PUBLIC_SITE_URL || 'http://localhost:3000',
  links: {
    github: 'https://github.com/{{name}}',
  },
}

export type SiteConfig = typeof siteConfig
"#;

pub const SITEMAP: &str = r#"import type { MetadataRoute } from 'next'
import { siteConfig } from '@/config/site'

export default function sitemap(): MetadataRoute.Sitemap {
  return [
    {
      url: siteConfig.url,
      lastModified: new Date(),
      changeFrequency: 'weekly',
      priority: 1,
    },
  ]
}
"#;

pub const ROBOTS: &str = r#"import type { MetadataRoute } from 'next'
import { siteConfig } from '@/config/site'

export default function robots(): MetadataRoute.Robots {
  return {
    rules: {
      userAgent: '*',
      allow: '/',
      disallow: ['/api/'],
    },
    sitemap: `${siteConfig.url}/sitemap.xml`,
  }
}
"#;

const LAYOUT: &str = r#"import type { Metadata } from 'next'
import { Inter } from 'next/font/google'
import './globals.css'
import { Providers } from '@/components/providers'
{{#if seo}}import { siteConfig } from '@/config/site'
{{/if}}
const inter = Inter({ subsets: ['latin'] })

export const metadata: Metadata = {
  title: {
    default: '{{name}}',
    template: `%s | {{name}}`,
  },
  description: 'Built with NextCraft',{{#if seo}}
  keywords: ['Next.js', 'React', 'TypeScript'],
  authors: [{ name: '{{name}}' }],
  creator: '{{name}}',
  metadataBase: new URL(siteConfig.url),
  openGraph: {
    type: 'website',
    locale: 'en_US',
    url: siteConfig.url,
    title: siteConfig.name,
    description: siteConfig.description,
    siteName: siteConfig.name,
  },
  twitter: {
    card: 'summary_large_image',
    title: siteConfig.name,
    description: siteConfig.description,
    creator: '@{{name}}',
  },{{/if}}
}

export default function RootLayout({
  children,
}: {
  children: React.ReactNode
}) {
  return (
    <html lang="{{lang}}"{{#if rtl}} dir="rtl"{{/if}}>
      <body className={inter.className}>
        <Providers>{children}</Providers>
      </body>
    </html>
  )
}
"#;

const HOME_PAGE: &str = r#"const cards = [
  { title: 'Docs', text: 'Find in-depth information about Next.js features and API.' },
  { title: 'Learn', text: 'Learn about Next.js in an interactive course with quizzes!' },
  { title: 'Templates', text: 'Explore starter templates for Next.js.' },
  { title: 'Deploy', text: 'Instantly deploy your Next.js site to a shareable URL.' },
]

export default function Home() {
  return (
    <main className="flex min-h-screen flex-col items-center justify-center p-24">
      <div className="z-10 max-w-5xl w-full items-center justify-between font-mono text-sm lg:flex">
        <h1 className="text-4xl font-bold mb-8">Welcome to {{name}}</h1>
      </div>

      <div className="mt-8 grid text-center lg:max-w-5xl lg:w-full lg:mb-0 lg:grid-cols-4 lg:text-left">
        {cards.map((card) => (
          <div
            key={card.title}
            className="group rounded-lg border border-transparent px-5 py-4 transition-colors hover:border-gray-300 hover:bg-gray-100"
          >
            <h2 className="mb-3 text-2xl font-semibold">
              {card.title}{' '}
              <span className="inline-block transition-transform group-hover:translate-x-1 motion-reduce:transform-none">
                -&gt;
              </span>
            </h2>
            <p className="m-0 max-w-[30ch] text-sm opacity-50">{card.text}</p>
          </div>
        ))}
      </div>

      <div className="mt-16 text-center">
        <p className="text-sm text-gray-500">Built with NextCraft</p>
      </div>
    </main>
  )
}
"#;

const SHADCN_PROVIDERS: &str = r#"'use client'

import { QueryClient, QueryClientProvider } from '@tanstack/react-query'
import { useState } from 'react'

export function Providers({ children }: { children: React.ReactNode }) {
  const [queryClient] = useState(() => new QueryClient())

  return <QueryClientProvider client={queryClient}>{children}</QueryClientProvider>
}
"#;

const CHAKRA_PROVIDERS: &str = r#"'use client'

import { ChakraProvider, defaultSystem } from '@chakra-ui/react'
import { QueryClient, QueryClientProvider } from '@tanstack/react-query'
import { useState } from 'react'

export function Providers({ children }: { children: React.ReactNode }) {
  const [queryClient] = useState(() => new QueryClient())

  return (
    <QueryClientProvider client={queryClient}>
      <ChakraProvider value={defaultSystem}>{children}</ChakraProvider>
    </QueryClientProvider>
  )
}
"#;

const MATERIAL_PROVIDERS: &str = r#"'use client'

import CssBaseline from '@mui/material/CssBaseline'
import { ThemeProvider, createTheme } from '@mui/material/styles'
import { QueryClient, QueryClientProvider } from '@tanstack/react-query'
import { useState } from 'react'

const theme = createTheme({
  direction: '{{direction}}',
})

export function Providers({ children }: { children: React.ReactNode }) {
  const [queryClient] = useState(() => new QueryClient())

  return (
    <QueryClientProvider client={queryClient}>
      <ThemeProvider theme={theme}>
        <CssBaseline />
        {children}
      </ThemeProvider>
    </QueryClientProvider>
  )
}
"#;

pub const API_CLIENT: &str = r#"import axios, { AxiosInstance, AxiosRequestConfig, AxiosResponse } from 'axios'

class APIClient {
  private client: AxiosInstance

  constructor(baseURL: string = process.env.NEXT_PUBLIC_API_URL || '') {
    this.client = axios.create({
      baseURL,
      timeout: 10000,
      headers: {
        'Content-Type': 'application/json',
      },
    })

    this.setupInterceptors()
  }

  private setupInterceptors(): void {
    this.client.interceptors.request.use(
      (config) => {
        const token = typeof window !== 'undefined' ? localStorage.getItem('token') : null
        if (token) {
          config.headers.Authorization = `Bearer ${token}`
        }
        return config
      },
      (error) => Promise.reject(error)
    )

    this.client.interceptors.response.use(
      (response) => response,
      (error) => {
        if (error.response?.status === 401 && typeof window !== 'undefined') {
          localStorage.removeItem('token')
          window.location.href = '/login'
        }
        return Promise.reject(error)
      }
    )
  }

  async get<T = unknown>(url: string, config?: AxiosRequestConfig): Promise<T> {
    const response: AxiosResponse<T> = await this.client.get(url, config)
    return response.data
  }

  async post<T = unknown>(url: string, data?: unknown, config?: AxiosRequestConfig): Promise<T> {
    const response: AxiosResponse<T> = await this.client.post(url, data, config)
    return response.data
  }

  async put<T = unknown>(url: string, data?: unknown, config?: AxiosRequestConfig): Promise<T> {
    const response: AxiosResponse<T> = await this.client.put(url, data, config)
    return response.data
  }

  async delete<T = unknown>(url: string, config?: AxiosRequestConfig): Promise<T> {
    const response: AxiosResponse<T> = await this.client.delete(url, config)
    return response.data
  }
}

export const api = new APIClient()
"#;

pub const USE_FETCH: &str = r#"import { useQuery, UseQueryOptions } from '@tanstack/react-query'
import { api } from '@/lib/api-client'

/**
 * Fetch and cache a GET endpoint with TanStack Query
 */
export function useFetch<T = unknown>(
  url: string,
  options?: Omit<UseQueryOptions<T, Error>, 'queryKey' | 'queryFn'>
) {
  return useQuery<T, Error>({
    queryKey: [url],
    queryFn: () => api.get<T>(url),
    ...options,
  })
}
"#;

/// Root layout; SEO metadata and `dir="rtl"` are emitted only when enabled
pub fn layout(options: &ProjectOptions) -> Result<String> {
    render(
        "src/app/layout.tsx",
        LAYOUT,
        &json!({
            "name": options.name,
            "seo": options.seo,
            "rtl": options.rtl,
            "lang": if options.rtl { "ar" } else { "en" },
        }),
    )
}

pub fn home_page(name: &str) -> Result<String> {
    render("src/app/page.tsx", HOME_PAGE, &json!({ "name": name }))
}

pub fn site_config(name: &str) -> Result<String> {
    render("src/config/site.ts", SITE_CONFIG, &json!({ "name": name }))
}

/// Client-side providers for the chosen UI library
pub fn providers(ui: UiLibrary, rtl: bool) -> Result<String> {
    match ui {
        UiLibrary::Shadcn => Ok(SHADCN_PROVIDERS.to_string()),
        UiLibrary::Chakra => Ok(CHAKRA_PROVIDERS.to_string()),
        UiLibrary::Material => render(
            "src/components/providers.tsx",
            MATERIAL_PROVIDERS,
            &json!({ "direction": if rtl { "rtl" } else { "ltr" } }),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Mode;
    use std::path::PathBuf;

    fn options(seo: bool, rtl: bool) -> ProjectOptions {
        let (options, _) = ProjectOptions::new(
            "demo",
            Mode::Frontend,
            UiLibrary::Shadcn,
            None,
            PathBuf::from("/tmp/demo"),
        )
        .unwrap();
        options.with_seo(seo).with_rtl(rtl)
    }

    #[test]
    fn test_layout_seo_block_is_conditional() {
        let with_seo = layout(&options(true, false)).unwrap();
        assert!(with_seo.contains("openGraph"));
        assert!(with_seo.contains("import { siteConfig } from '@/config/site'"));

        let without_seo = layout(&options(false, false)).unwrap();
        assert!(!without_seo.contains("openGraph"));
        assert!(!without_seo.contains("siteConfig"));
    }

    #[test]
    fn test_layout_rtl_attribute_is_conditional() {
        assert!(!layout(&options(true, false)).unwrap().contains("dir=\"rtl\""));
        assert!(layout(&options(true, true))
            .unwrap()
            .contains("<html lang=\"ar\" dir=\"rtl\">"));
    }

    #[test]
    fn test_layout_interpolates_name() {
        let out = layout(&options(true, false)).unwrap();
        assert!(out.contains("default: 'demo'"));
        assert!(out.contains("template: `%s | demo`"));
    }

    #[test]
    fn test_material_providers_follow_direction() {
        assert!(providers(UiLibrary::Material, true)
            .unwrap()
            .contains("direction: 'rtl'"));
        assert!(providers(UiLibrary::Chakra, false)
            .unwrap()
            .contains("ChakraProvider"));
    }
}
