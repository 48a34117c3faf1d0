//! FastAPI REST service bundle.

use super::{Bundle, TemplateFile};
use crate::classifier::Category;

pub(crate) static FASTAPI_SERVICE: Bundle = Bundle {
    name: "fastapi_service",
    category: Category::Api,
    files: &[
        TemplateFile {
            path: "app.py",
            body: APP_PY,
        },
        TemplateFile {
            path: "models.py",
            body: MODELS_PY,
        },
        TemplateFile {
            path: "requirements.txt",
            body: REQUIREMENTS,
        },
    ],
    required: &["app_title", "description", "resource", "model", "route_path"],
};

const APP_PY: &str = r#""""${app_title} - ${description}"""

from fastapi import FastAPI, HTTPException

from models import ${model}, ${model}Create

app = FastAPI(title="${app_title}")

# In-memory store keyed by id; swap for a database when persistence matters
store: dict[int, ${model}] = {}
next_id = 1


@app.get("${route_path}")
def list_${resource}() -> list[${model}]:
    return list(store.values())


@app.get("${route_path}/{item_id}")
def get_one(item_id: int) -> ${model}:
    if item_id not in store:
        raise HTTPException(status_code=404, detail="${model} not found")
    return store[item_id]


@app.post("${route_path}", status_code=201)
def create(payload: ${model}Create) -> ${model}:
    global next_id
    item = ${model}(id=next_id, **payload.model_dump())
    store[next_id] = item
    next_id += 1
    return item


@app.put("${route_path}/{item_id}")
def update(item_id: int, payload: ${model}Create) -> ${model}:
    if item_id not in store:
        raise HTTPException(status_code=404, detail="${model} not found")
    item = ${model}(id=item_id, **payload.model_dump())
    store[item_id] = item
    return item


@app.delete("${route_path}/{item_id}", status_code=204)
def delete(item_id: int) -> None:
    if item_id not in store:
        raise HTTPException(status_code=404, detail="${model} not found")
    del store[item_id]


if __name__ == "__main__":
    import uvicorn

    uvicorn.run(app, host="127.0.0.1", port=8000)
"#;

const MODELS_PY: &str = r#""""Pydantic models for ${app_title}."""

from pydantic import BaseModel


class ${model}Base(BaseModel):
    name: str
    description: str = ""


class ${model}Create(${model}Base):
    pass


class ${model}(${model}Base):
    id: int
"#;

const REQUIREMENTS: &str = "fastapi>=0.100\nuvicorn>=0.23\n";
