//! Next.js 16 feature pack

use crate::error::Result;
use crate::generator::{Phase, PhaseContext};
use crate::templates::next16 as t;

pub struct Next16Features;

impl Phase for Next16Features {
    fn name(&self) -> &'static str {
        "next16-features"
    }

    fn run(&self, ctx: &mut PhaseContext<'_>) -> Result<()> {
        let tree = &mut *ctx.tree;
        tree.write("src/app/actions/index.ts", t::SERVER_ACTIONS);
        tree.write("src/lib/cache.ts", t::CACHE_UTILITIES);
        tree.write("src/lib/server-utils.ts", t::SERVER_ONLY);
        tree.write("src/lib/client-utils.ts", t::CLIENT_ONLY);
        tree.write("src/components/examples/optimistic-list.tsx", t::OPTIMISTIC_LIST);
        tree.write("src/components/examples/login-form.tsx", t::LOGIN_FORM);
        tree.write("NEXTJS_16.md", t::GUIDE);

        ctx.manifest.add_scripts(t::SCRIPTS);
        Ok(())
    }
}
