//! Next.js 16 feature pack: server actions, cache helpers, React 19 examples

pub const SERVER_ACTIONS: &str = r#"'use server'

import { revalidatePath, revalidateTag } from 'next/cache'
import { redirect } from 'next/navigation'

export type FormState = { message: string } | null

export async function submitForm(_prevState: FormState, formData: FormData): Promise<FormState> {
  const name = formData.get('name')
  const email = formData.get('email')

  if (!name || !email) {
    return { message: 'All fields are required' }
  }

  revalidatePath('/')
  return { message: 'Success!' }
}

export async function deleteItem(_id: string) {
  revalidatePath('/items')
  redirect('/items')
}

export async function updateItem(id: string, _data: unknown) {
  try {
    revalidateTag(`item-${id}`, 'max')
    revalidateTag('items', 'max')
    return { success: true }
  } catch (error) {
    const message = error instanceof Error ? error.message : 'Unknown error'
    return { success: false, error: message }
  }
}

export async function addItem(name: string): Promise<{ id: string; name: string }> {
  await new Promise((resolve) => setTimeout(resolve, 500))
  return { id: Math.random().toString(36).slice(2), name }
}

export type LoginState = { error: string | null; success: boolean }

export async function loginUser(_prevState: LoginState, formData: FormData): Promise<LoginState> {
  const email = formData.get('email')
  const password = formData.get('password')

  if (!email || !password) {
    return { error: 'All fields are required', success: false }
  }

  await new Promise((resolve) => setTimeout(resolve, 500))
  return { error: null, success: true }
}
"#;

pub const CACHE_UTILITIES: &str = r#"import { cacheLife, cacheTag } from 'next/cache'

export async function getCachedData(id: string) {
  'use cache'
  cacheLife('hours')
  cacheTag('data', `data-${id}`)

  const response = await fetch(`https://api.example.com/data/${id}`)
  return response.json()
}

export async function getUser(id: string) {
  'use cache'
  cacheLife('hours')
  cacheTag('users', `user-${id}`)

  const response = await fetch(`https://api.example.com/users/${id}`)
  return response.json()
}
"#;

pub const SERVER_ONLY: &str = r#"import 'server-only'

export async function getSecretData() {
  const secret = process.env.SECRET_API_KEY

  const response = await fetch('https://api.example.com/secret', {
    headers: {
      Authorization: `Bearer ${secret}`,
    },
  })

  return response.json()
}

export async function validateToken(token: string) {
  return token === process.env.SECRET_TOKEN
}
"#;

pub const CLIENT_ONLY: &str = r#"import 'client-only'

declare global {
  interface Window {
    gtag?: (...args: unknown[]) => void
  }
}

export function trackEvent(name: string, properties?: Record<string, unknown>) {
  if (typeof window !== 'undefined' && window.gtag) {
    window.gtag('event', name, properties)
  }
}

export function getLocalStorage(key: string) {
  if (typeof window !== 'undefined') {
    return localStorage.getItem(key)
  }
  return null
}
"#;

pub const OPTIMISTIC_LIST: &str = r#"'use client'

import { useOptimistic, useTransition } from 'react'
import { addItem } from '@/app/actions'

export function OptimisticList({ items }: { items: string[] }) {
  const [isPending, startTransition] = useTransition()
  const [optimisticItems, addOptimisticItem] = useOptimistic(
    items,
    (state, newItem: string) => [...state, newItem]
  )

  function handleSubmit(formData: FormData) {
    const newItem = formData.get('item') as string

    startTransition(async () => {
      addOptimisticItem(newItem)
      await addItem(newItem)
    })
  }

  return (
    <div>
      <ul>
        {optimisticItems.map((item, i) => (
          <li key={i} className={isPending ? 'opacity-50' : ''}>
            {item}
          </li>
        ))}
      </ul>

      <form action={handleSubmit}>
        <input name="item" required />
        <button disabled={isPending}>{isPending ? 'Adding...' : 'Add Item'}</button>
      </form>
    </div>
  )
}
"#;

pub const LOGIN_FORM: &str = r#"'use client'

import { useActionState } from 'react'
import { loginUser } from '@/app/actions'

export function LoginForm() {
  const [state, formAction, isPending] = useActionState(loginUser, {
    error: null,
    success: false,
  })

  return (
    <form action={formAction}>
      <div>
        <label htmlFor="email">Email</label>
        <input id="email" name="email" type="email" required disabled={isPending} />
      </div>

      <div>
        <label htmlFor="password">Password</label>
        <input id="password" name="password" type="password" required disabled={isPending} />
      </div>

      {state.error && <div className="text-red-500">{state.error}</div>}
      {state.success && <div className="text-green-500">Login successful!</div>}

      <button type="submit" disabled={isPending}>
        {isPending ? 'Logging in...' : 'Login'}
      </button>
    </form>
  )
}
"#;

pub const GUIDE: &str = r#"# Next.js 16 Features in This Project

This project uses **Next.js 16** with **React 19**.

## Highlights

- **Turbopack** is the default bundler for `dev` and `build`
- **Cache Components** (`'use cache'`, `cacheLife`, `cacheTag`) are enabled in `next.config.ts`
- **Server Actions** live in `src/app/actions/index.ts`
- **React Compiler** is enabled

## Layout

```
src/
  app/
    actions/index.ts        server actions used by the examples
  components/
    examples/
      optimistic-list.tsx   useOptimistic
      login-form.tsx        useActionState
  lib/
    cache.ts                cached data loaders
    server-utils.ts         server-only helpers
    client-utils.ts         client-only helpers
```

## Async request APIs

`params`, `searchParams`, `cookies()` and `headers()` are promises:

```tsx
export default async function Page({ params }: { params: Promise<{ id: string }> }) {
  const { id } = await params
  return <div>ID: {id}</div>
}
```

## Invalidating cached data

```ts
'use server'
import { revalidateTag } from 'next/cache'

export async function updateData(id: string) {
  revalidateTag(`data-${id}`, 'max')
}
```

## Resources

- [Next.js 16 Docs](https://nextjs.org/docs)
- [React 19](https://react.dev/blog)

---

Generated by NextCraft
"#;

pub const SCRIPTS: &[(&str, &str)] = &[
    ("dev", "next dev"),
    ("dev:debug", "NODE_OPTIONS='--inspect' next dev"),
    ("type-check", "tsc --noEmit"),
];
