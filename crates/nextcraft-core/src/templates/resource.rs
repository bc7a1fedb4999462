//! CRUD resource files: validation schema, server actions, form and list page
//!
//! Every template is rendered with `name` (lower-case) and `pascal`
//! (capitalised) bound.

use super::render;
use crate::error::Result;
use serde_json::json;

const VALIDATION: &str = r#"import { z } from "zod"

export const {{name}}Schema = z.object({
  title: z.string().min(1, "Title is required"),
  content: z.string().min(1, "Content is required"),
})

export type {{pascal}}Input = z.infer<typeof {{name}}Schema>
"#;

const ACTIONS: &str = r#""use server"

import { prisma as db } from "@/lib/db/prisma"
import { {{name}}Schema, {{pascal}}Input } from "@/lib/validations/{{name}}"
import { revalidatePath } from "next/cache"

export async function create{{pascal}}(data: {{pascal}}Input) {
  const result = {{name}}Schema.safeParse(data)

  if (!result.success) {
    return { error: "Invalid input" }
  }

  try {
    await db.{{name}}.create({
      data: result.data,
    })
    revalidatePath("/{{name}}s")
    return { success: true }
  } catch {
    return { error: "Failed to create {{name}}" }
  }
}

export async function delete{{pascal}}(id: string) {
  try {
    await db.{{name}}.delete({
      where: { id },
    })
    revalidatePath("/{{name}}s")
    return { success: true }
  } catch {
    return { error: "Failed to delete {{name}}" }
  }
}
"#;

const FORM: &str = r#""use client"

import { useForm } from "react-hook-form"
import { zodResolver } from "@hookform/resolvers/zod"
import { {{name}}Schema, {{pascal}}Input } from "@/lib/validations/{{name}}"
import { create{{pascal}} } from "@/lib/actions/{{name}}"
import { Button } from "@/components/ui/button"
import { Input } from "@/components/ui/input"
import { Textarea } from "@/components/ui/textarea"
import {
  Form,
  FormControl,
  FormField,
  FormItem,
  FormLabel,
  FormMessage,
} from "@/components/ui/form"
import { toast } from "sonner"

export function {{pascal}}Form() {
  const form = useForm<{{pascal}}Input>({
    resolver: zodResolver({{name}}Schema),
    defaultValues: {
      title: "",
      content: "",
    },
  })

  async function onSubmit(data: {{pascal}}Input) {
    const result = await create{{pascal}}(data)

    if (result.error) {
      toast.error(result.error)
      return
    }

    toast.success("{{pascal}} created successfully")
    form.reset()
  }

  return (
    <Form {...form}>
      <form onSubmit={form.handleSubmit(onSubmit)} className="space-y-4">
        <FormField
          control={form.control}
          name="title"
          render={({ field }) => (
            <FormItem>
              <FormLabel>Title</FormLabel>
              <FormControl>
                <Input placeholder="Enter title" {...field} />
              </FormControl>
              <FormMessage />
            </FormItem>
          )}
        />
        <FormField
          control={form.control}
          name="content"
          render={({ field }) => (
            <FormItem>
              <FormLabel>Content</FormLabel>
              <FormControl>
                <Textarea placeholder="Enter content" {...field} />
              </FormControl>
              <FormMessage />
            </FormItem>
          )}
        />
        <Button type="submit">Create {{pascal}}</Button>
      </form>
    </Form>
  )
}
"#;

const PAGE: &str = r#"import { prisma as db } from "@/lib/db/prisma"
import { {{pascal}}Form } from "@/components/{{name}}/{{name}}-form"

export default async function {{pascal}}sPage() {
  const items = await db.{{name}}.findMany({
    orderBy: { createdAt: "desc" },
  })

  return (
    <div className="container py-10 max-w-2xl">
      <h1 className="text-3xl font-bold mb-8">{{pascal}}s</h1>

      <div className="mb-10 p-6 border rounded-lg">
        <h2 className="text-xl font-semibold mb-4">Create New</h2>
        <{{pascal}}Form />
      </div>

      <div className="space-y-4">
        <h2 className="text-xl font-semibold">All {{pascal}}s</h2>
        {items.map((item) => (
          <div key={item.id} className="p-4 border rounded-lg">
            <h3 className="font-bold">{item.title}</h3>
            <p className="text-muted-foreground mt-1">{item.content}</p>
          </div>
        ))}
        {items.length === 0 && (
          <p className="text-muted-foreground">No items found.</p>
        )}
      </div>
    </div>
  )
}
"#;

const MODEL: &str = r#"model {{pascal}} {
  id        String   @id @default(cuid())
  title     String
  content   String
  createdAt DateTime @default(now())
  updatedAt DateTime @updatedAt
}
"#;

/// Lower-case and capitalised forms of a resource name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceName {
    pub name: String,
    pub pascal: String,
}

impl ResourceName {
    pub fn new(raw: &str) -> Self {
        let name = raw.to_lowercase();
        let mut chars = name.chars();
        let pascal = match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        };
        Self { name, pascal }
    }

    /// Files written for the resource, as (relative path, content)
    pub fn files(&self) -> Result<Vec<(String, String)>> {
        let n = &self.name;
        Ok(vec![
            (
                format!("src/lib/validations/{n}.ts"),
                self.render("validation", VALIDATION)?,
            ),
            (
                format!("src/lib/actions/{n}.ts"),
                self.render("actions", ACTIONS)?,
            ),
            (
                format!("src/components/{n}/{n}-form.tsx"),
                self.render("form", FORM)?,
            ),
            (format!("src/app/{n}s/page.tsx"), self.render("page", PAGE)?),
        ])
    }

    /// Prisma model block the user is asked to add
    pub fn model(&self) -> Result<String> {
        self.render("model", MODEL)
    }

    fn render(&self, template: &str, source: &str) -> Result<String> {
        render(
            &format!("resource/{template}"),
            source,
            &json!({ "name": self.name, "pascal": self.pascal }),
        )
    }
}
