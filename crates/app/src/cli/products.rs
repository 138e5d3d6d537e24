use std::io;

use avaria::{export::render_products, pricing::format_currency};
use avaria_app::context::AppContext;
use clap::{Args, Subcommand};

use crate::cli::output_error;

#[derive(Debug, Args)]
pub(crate) struct ProductsCommand {
    #[command(subcommand)]
    command: ProductsSubcommand,
}

#[derive(Debug, Subcommand)]
enum ProductsSubcommand {
    /// List the catalog
    List,

    /// Look up a product by code
    Find {
        /// Product code, e.g. TV-LG-55 (case-insensitive)
        code: String,
    },
}

pub(crate) fn run(
    command: ProductsCommand,
    ctx: &AppContext,
    out: &mut impl io::Write,
) -> Result<(), String> {
    match command.command {
        ProductsSubcommand::List => {
            writeln!(out, "{}", render_products(&ctx.products.list_products()))
                .map_err(output_error)?;
        }
        ProductsSubcommand::Find { code } => {
            let product = ctx
                .products
                .find_by_code(&code)
                .ok_or_else(|| format!("product not found: {}", code.trim()))?;

            writeln!(out, "SKU:       {}", product.id).map_err(output_error)?;
            writeln!(out, "Produto:   {}", product.name).map_err(output_error)?;
            writeln!(out, "Categoria: {}", product.category).map_err(output_error)?;
            writeln!(out, "Preço:     {}", format_currency(product.price)).map_err(output_error)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::cli::tests::{context, execute};

    #[test]
    fn lists_catalog() -> TestResult {
        let ctx = context()?;

        let output = execute(&ctx, &["products", "list"])?;

        for code in ["TV-LG-55", "GEL-BRA-01", "NOTE-DELL-I15", "GR-MAD-03", "FOG-CON-05"] {
            assert!(output.contains(code), "{code} missing: {output}");
        }

        Ok(())
    }

    #[test]
    fn finds_product_by_lowercase_code() -> TestResult {
        let ctx = context()?;

        let output = execute(&ctx, &["products", "find", "tv-lg-55"])?;

        assert!(output.contains("TV-LG-55"), "code missing: {output}");
        assert!(output.contains("R$ 2.999,00"), "price missing: {output}");

        Ok(())
    }

    #[test]
    fn unknown_code_fails() -> TestResult {
        let ctx = context()?;

        let result = execute(&ctx, &["products", "find", "XYZ"]);

        assert_eq!(result, Err("product not found: XYZ".to_string()));

        Ok(())
    }
}
